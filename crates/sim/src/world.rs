//! Scene targets and the simulated focus query.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use interaction_content::{Aim, Scenario, TargetSpec};
use interaction_core::{
    DetectionConfig, InteractionMode, PromptDescriptor, TargetHandle, Targetable,
};

/// Target placed in the simulated scene.
#[derive(Debug)]
pub struct SceneTarget {
    spec: TargetSpec,
    available: Cell<bool>,
    focused: Cell<bool>,
    interactions: Cell<u32>,
}

impl SceneTarget {
    pub fn new(spec: TargetSpec) -> Self {
        Self {
            available: Cell::new(spec.available),
            spec,
            focused: Cell::new(false),
            interactions: Cell::new(0),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    pub fn interactions(&self) -> u32 {
        self.interactions.get()
    }

    /// Sphere-cast test of the view ray against this target.
    pub fn is_hit(&self, offset: f32, detection: &DetectionConfig) -> bool {
        detection.includes_layer(self.spec.layer)
            && self.spec.distance <= detection.interact_distance
            && offset.abs() <= self.spec.radius + detection.sphere_radius
    }
}

impl Targetable for SceneTarget {
    fn prompt_label(&self) -> String {
        self.spec.label.clone()
    }

    fn can_interact(&self) -> bool {
        self.available.get()
    }

    fn interaction_mode(&self) -> InteractionMode {
        self.spec.mode
    }

    fn hold_override(&self) -> Option<Duration> {
        self.spec
            .hold_secs
            .and_then(|secs| Duration::try_from_secs_f32(secs).ok())
    }

    fn custom_prompt(&self) -> Option<PromptDescriptor> {
        self.spec.prompt.clone()
    }

    fn on_focus(&self) {
        self.focused.set(true);
        tracing::info!(target_id = %self.spec.id, "focused");
    }

    fn on_defocus(&self) {
        self.focused.set(false);
        tracing::info!(target_id = %self.spec.id, "defocused");
    }

    fn interact(&self) {
        self.interactions.set(self.interactions.get() + 1);
        tracing::info!(
            target_id = %self.spec.id,
            count = self.interactions.get(),
            "interacted"
        );
    }
}

/// All targets of a scenario.
#[derive(Debug, Default)]
pub struct World {
    targets: Vec<Rc<SceneTarget>>,
}

impl World {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            targets: scenario
                .targets
                .iter()
                .cloned()
                .map(|spec| Rc::new(SceneTarget::new(spec)))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Rc<SceneTarget>> {
        self.targets.iter().find(|t| t.id() == id)
    }

    pub fn targets(&self) -> impl Iterator<Item = &Rc<SceneTarget>> {
        self.targets.iter()
    }

    /// Host-side focus query: what the agent's view ray hits, if anything.
    pub fn hit_test(&self, aim: Option<&Aim>, detection: &DetectionConfig) -> Option<TargetHandle> {
        let aim = aim?;
        let target = self.get(&aim.target)?;
        if !target.is_hit(aim.offset, detection) {
            return None;
        }
        let handle: TargetHandle = target.clone();
        Some(handle)
    }
}
