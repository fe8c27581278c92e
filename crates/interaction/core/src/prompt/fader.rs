//! Prompt opacity model.

use std::time::Duration;

/// Moves prompt opacity towards fully shown or fully hidden at a fixed rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PromptFader {
    alpha: f32,
    target_alpha: f32,
    /// Alpha units per second.
    fade_speed: f32,
}

impl PromptFader {
    pub const DEFAULT_FADE_SPEED: f32 = 12.0;

    /// Starts hidden.
    pub fn new(fade_speed: f32) -> Self {
        Self {
            alpha: 0.0,
            target_alpha: 0.0,
            fade_speed: fade_speed.max(0.0),
        }
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    #[inline]
    pub fn is_shown(&self) -> bool {
        self.target_alpha > 0.0
    }

    pub fn show(&mut self) {
        self.target_alpha = 1.0;
    }

    pub fn hide(&mut self) {
        self.target_alpha = 0.0;
    }

    /// Snaps to shown or hidden without fading.
    pub fn set_immediate(&mut self, visible: bool) {
        self.target_alpha = if visible { 1.0 } else { 0.0 };
        self.alpha = self.target_alpha;
    }

    /// Advances the fade by `dt`. Returns the new alpha.
    pub fn update(&mut self, dt: Duration) -> f32 {
        let step = dt.as_secs_f32() * self.fade_speed;
        let delta = self.target_alpha - self.alpha;
        self.alpha = if delta.abs() <= step {
            self.target_alpha
        } else {
            self.alpha + step.copysign(delta)
        };
        self.alpha
    }
}

impl Default for PromptFader {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FADE_SPEED)
    }
}
