//! Simulator configuration.
//!
//! Starts from a TOML file when `INTERACT_CONFIG` names one, then applies
//! single-value overrides from the environment.

use std::env;
use std::path::Path;

use anyhow::Result;
use interaction_content::ConfigLoader;
use interaction_core::InteractionConfig;

#[derive(Clone, Debug, Default)]
pub struct SimConfig {
    pub interaction: InteractionConfig,
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `INTERACT_CONFIG` - Path to a TOML interaction config
    /// - `INTERACT_KEY` - Key glyph shown in prompts (default: E)
    /// - `INTERACT_HOLD` - Hold to interact by default (default: false)
    /// - `INTERACT_HOLD_SECS` - Default hold duration (default: 0.5)
    pub fn from_env() -> Result<Self> {
        let mut interaction = match env::var("INTERACT_CONFIG") {
            Ok(path) => ConfigLoader::load(Path::new(&path))?,
            Err(_) => InteractionConfig::default(),
        };

        if let Ok(key) = env::var("INTERACT_KEY")
            && !key.trim().is_empty()
        {
            interaction.input.interact_key = key.trim().to_owned();
        }
        if let Some(hold) = read_env_bool("INTERACT_HOLD") {
            interaction.input.hold_to_interact = hold;
        }
        if let Some(secs) = read_env::<f32>("INTERACT_HOLD_SECS") {
            interaction.input.hold_duration_secs = secs;
        }

        interaction
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid interaction config: {}", e))?;

        Ok(Self { interaction })
    }

    #[inline]
    pub fn key_glyph(&self) -> &str {
        &self.interaction.input.interact_key
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bool_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("on"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
