//! Headless host for the interaction controller.
//!
//! Replays RON scenarios through [`interaction_core::InteractionController`]
//! with a simulated focus query, standing in for an engine integration.
pub mod config;
pub mod presentation;
pub mod simulation;
pub mod world;

pub use config::SimConfig;
pub use simulation::{FrameOutcome, Simulation};
pub use world::{SceneTarget, World};
