//! Data-driven interaction content and loaders.
//!
//! - Interaction configuration (TOML)
//! - Simulation scenarios (RON)
//!
//! All loaders use interaction-core types directly with serde.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{Aim, FrameSpec, Scenario, TargetSpec};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ScenarioLoader};
