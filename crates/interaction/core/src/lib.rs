//! Engine-independent player interaction logic.
//!
//! Once per host tick the controller works out what the agent is looking at,
//! decides whether a press or a timed hold fires an interaction, and formats
//! the prompt the host should display. Rendering, input binding and the
//! actual hit test stay with the host.
//!
//! # Architecture
//!
//! - [`Targetable`]: capability trait implemented by interactable objects
//! - [`FocusResolver`]: tracks the focused target by identity
//! - [`TriggerEvaluator`]: press / hold state machine
//! - [`PromptComposer`]: builds [`DisplayMessage`]s from templates
//! - [`InteractionController`]: runs the three stages in order each tick
pub mod config;
pub mod controller;
pub mod error;
pub mod focus;
pub mod input;
pub mod listener;
pub mod mode;
pub mod prompt;
pub mod target;
pub mod trigger;

pub use config::{DetectionConfig, InputConfig, InteractionConfig, PromptConfig};
pub use controller::{DebugSnapshot, InteractionController, TickReport};
pub use error::{ConfigError, TemplateError};
pub use focus::{FocusChange, FocusResolver};
pub use input::InputSample;
pub use listener::{InteractionListener, ListenerChain};
pub use mode::{InteractionMode, TriggerMode};
pub use prompt::{
    DisplayMessage, PromptComposer, PromptFader, PromptTemplate, ReticleStyle, ReticleView, Rgba,
};
pub use target::{IconId, PromptDescriptor, TargetHandle, Targetable, same_target};
pub use trigger::{TriggerDefaults, TriggerEvaluator, TriggerResult};
