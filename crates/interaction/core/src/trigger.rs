//! Press / hold trigger evaluation.
//!
//! [`TriggerEvaluator`] owns the hold timer. Each tick it is given the focused
//! target and an [`InputSample`] and decides whether the interaction fires.
//!
//! # Rules
//!
//! - No target, or a target that cannot be interacted with: timer resets,
//!   nothing fires. A hold in progress is abandoned silently.
//! - Press: fires on the input edge only, never while merely held.
//! - Hold: the timer accumulates while held; it fires on the tick the timer
//!   reaches the hold duration and then restarts from zero. Releasing early
//!   resets the timer.
//!
//! Focus changes are detected by the caller, which must call
//! [`TriggerEvaluator::reset`] before evaluating the new target.

use std::time::Duration;

use crate::input::InputSample;
use crate::mode::TriggerMode;
use crate::target::Targetable;

/// Lower bound applied to hold durations so progress never divides by zero.
pub const MIN_HOLD_DURATION: Duration = Duration::from_micros(100);

/// Result of a single evaluation. Produced fresh every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerResult {
    /// The interaction fires this tick.
    pub fired: bool,
    /// Hold progress in `[0, 1]`. Always 0 in press mode.
    pub progress: f32,
    /// Mode the target was evaluated with.
    pub mode: TriggerMode,
}

impl TriggerResult {
    const fn idle(mode: TriggerMode) -> Self {
        Self {
            fired: false,
            progress: 0.0,
            mode,
        }
    }
}

/// Global defaults applied to targets that do not override them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerDefaults {
    pub mode: TriggerMode,
    pub hold_duration: Duration,
}

impl TriggerDefaults {
    pub const DEFAULT_HOLD_DURATION: Duration = Duration::from_millis(500);

    pub const fn new(mode: TriggerMode, hold_duration: Duration) -> Self {
        Self {
            mode,
            hold_duration,
        }
    }
}

impl Default for TriggerDefaults {
    fn default() -> Self {
        Self::new(TriggerMode::Press, Self::DEFAULT_HOLD_DURATION)
    }
}

/// Hold timer state machine.
#[derive(Clone, Debug, Default)]
pub struct TriggerEvaluator {
    timer: Duration,
}

impl TriggerEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time accumulated towards the current hold.
    #[inline]
    pub fn timer(&self) -> Duration {
        self.timer
    }

    /// Discards any hold progress.
    #[inline]
    pub fn reset(&mut self) {
        self.timer = Duration::ZERO;
    }

    /// Advances the state machine by one tick.
    pub fn evaluate(
        &mut self,
        target: Option<&dyn Targetable>,
        input: InputSample,
        defaults: TriggerDefaults,
        dt: Duration,
    ) -> TriggerResult {
        let Some(target) = target else {
            self.reset();
            return TriggerResult::idle(defaults.mode);
        };

        let mode = target.interaction_mode().resolve(defaults.mode);
        if !target.can_interact() {
            self.reset();
            return TriggerResult::idle(mode);
        }

        let duration = effective_hold_duration(target.hold_override(), defaults.hold_duration);

        match mode {
            TriggerMode::Press => {
                self.reset();
                TriggerResult {
                    fired: input.pressed_this_tick,
                    progress: 0.0,
                    mode,
                }
            }
            TriggerMode::Hold => self.advance_hold(input.held, duration, dt),
        }
    }

    fn advance_hold(&mut self, held: bool, duration: Duration, dt: Duration) -> TriggerResult {
        if !held {
            self.reset();
            return TriggerResult::idle(TriggerMode::Hold);
        }

        self.timer = self.timer.saturating_add(dt);
        let progress = hold_progress(self.timer, duration);

        if self.timer >= duration {
            self.reset();
            return TriggerResult {
                fired: true,
                progress: 1.0,
                mode: TriggerMode::Hold,
            };
        }

        tracing::trace!(progress, "hold in progress");
        TriggerResult {
            fired: false,
            progress,
            mode: TriggerMode::Hold,
        }
    }
}

/// Picks the target override or the default, clamped to [`MIN_HOLD_DURATION`].
#[inline]
pub fn effective_hold_duration(hold_override: Option<Duration>, default: Duration) -> Duration {
    hold_override.unwrap_or(default).max(MIN_HOLD_DURATION)
}

/// `timer / duration`, clamped to `[0, 1]`.
#[inline]
pub fn hold_progress(timer: Duration, duration: Duration) -> f32 {
    let duration = duration.max(MIN_HOLD_DURATION);
    (timer.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}
