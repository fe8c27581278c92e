//! Interaction configuration loader.

use std::path::Path;

use interaction_core::InteractionConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for interaction configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config from a TOML file.
    ///
    /// Missing sections and fields take their defaults.
    pub fn load(path: &Path) -> LoadResult<InteractionConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate config from TOML text.
    pub fn parse(content: &str) -> LoadResult<InteractionConfig> {
        let config: InteractionConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse interaction config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid interaction config: {}", e))?;

        Ok(config)
    }
}
