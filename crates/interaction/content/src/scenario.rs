//! Scripted interaction scenarios.
//!
//! A scenario lists the targets placed in front of an agent and a timeline of
//! frames saying where the agent aims and what the interact control does.
//! Hosts replay them to exercise the controller without an engine.

use std::time::Duration;

use interaction_core::{InteractionMode, PromptDescriptor};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub targets: Vec<TargetSpec>,
    pub frames: Vec<FrameSpec>,
}

impl Scenario {
    pub fn target(&self, id: &str) -> Option<&TargetSpec> {
        self.targets.iter().find(|t| t.id == id)
    }

    /// Total simulated time.
    pub fn duration(&self) -> Duration {
        self.frames.iter().map(FrameSpec::dt).sum()
    }
}

/// Interactable placed in the scene.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSpec {
    pub id: String,
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: InteractionMode,
    /// Hold duration override in seconds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hold_secs: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default = "default_available"))]
    pub available: bool,
    /// Physics layer, checked against the detection mask.
    #[cfg_attr(feature = "serde", serde(default))]
    pub layer: u8,
    /// Distance from the agent along the view direction.
    pub distance: f32,
    /// Collider radius around the target centre.
    #[cfg_attr(feature = "serde", serde(default = "default_radius"))]
    pub radius: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub prompt: Option<PromptDescriptor>,
}

impl TargetSpec {
    pub const DEFAULT_RADIUS: f32 = 0.5;
}

/// One host tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrameSpec {
    pub dt_ms: u64,
    /// Where the agent aims; `None` looks at nothing.
    pub aim: Option<Aim>,
    /// Level of the interact control this frame. The press edge is derived
    /// from the previous frame.
    pub down: bool,
    /// Availability changes applied before the frame runs.
    pub set_available: Vec<(String, bool)>,
}

impl FrameSpec {
    #[inline]
    pub fn dt(&self) -> Duration {
        Duration::from_millis(self.dt_ms)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aim {
    pub target: String,
    /// Lateral miss distance between the view ray and the target centre.
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset: f32,
}

#[cfg(feature = "serde")]
fn default_available() -> bool {
    true
}

#[cfg(feature = "serde")]
fn default_radius() -> f32 {
    TargetSpec::DEFAULT_RADIUS
}
