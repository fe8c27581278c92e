//! Per-agent interaction controller.
//!
//! [`InteractionController`] runs the three stages in a fixed order once per
//! host tick:
//!
//! 1. [`FocusResolver`] asks the host hit test what is being looked at.
//! 2. [`TriggerEvaluator`] advances the press/hold state machine. Hold
//!    progress is discarded whenever focus changes.
//! 3. [`PromptComposer`] builds the display message.
//!
//! Fired interactions are forwarded to the target's `interact` hook and then
//! to the [`ListenerChain`].
//!
//! The controller is single-threaded and never blocks. Hosts call
//! [`start`](InteractionController::start) when the agent becomes active and
//! [`stop`](InteractionController::stop) when it is disabled; stopping
//! defocuses the current target so an in-progress hold can never complete.

use std::time::Duration;

use crate::config::InteractionConfig;
use crate::error::ConfigError;
use crate::focus::{FocusChange, FocusResolver};
use crate::input::InputSample;
use crate::listener::{InteractionListener, ListenerChain};
use crate::mode::TriggerMode;
use crate::prompt::{DisplayMessage, PromptComposer};
use crate::target::TargetHandle;
use crate::trigger::{TriggerDefaults, TriggerEvaluator, TriggerResult, hold_progress};

/// Everything the host needs to react to one tick.
#[derive(Debug, Default)]
pub struct TickReport {
    pub focus: FocusChange,
    pub trigger: TriggerResult,
    /// `None` hides the prompt.
    pub display: Option<DisplayMessage>,
}

impl TickReport {
    #[inline]
    pub fn fired(&self) -> bool {
        self.trigger.fired
    }
}

/// Read-only view of the controller for debug overlays.
#[derive(Clone, Debug, PartialEq)]
pub struct DebugSnapshot {
    pub running: bool,
    pub focused: Option<String>,
    pub can_interact: bool,
    /// Mode the focused target would be evaluated with.
    pub mode: TriggerMode,
    pub hold_timer: Duration,
    pub hold_progress: f32,
}

/// Focus-and-trigger controller for one agent.
pub struct InteractionController {
    defaults: TriggerDefaults,
    focus: FocusResolver,
    trigger: TriggerEvaluator,
    composer: PromptComposer,
    listeners: ListenerChain,
    running: bool,
}

impl InteractionController {
    /// Builds a stopped controller from validated configuration.
    pub fn new(config: &InteractionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_parts(
            config.trigger_defaults()?,
            PromptComposer::new(&config.prompt.press_format, &config.prompt.hold_format),
        ))
    }

    pub fn with_parts(defaults: TriggerDefaults, composer: PromptComposer) -> Self {
        Self {
            defaults,
            focus: FocusResolver::new(),
            trigger: TriggerEvaluator::new(),
            composer,
            listeners: ListenerChain::new(),
            running: false,
        }
    }

    #[inline]
    pub fn defaults(&self) -> TriggerDefaults {
        self.defaults
    }

    pub fn set_defaults(&mut self, defaults: TriggerDefaults) {
        self.defaults = defaults;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Currently focused target.
    #[inline]
    pub fn current(&self) -> Option<&TargetHandle> {
        self.focus.current()
    }

    /// Attaches a listener run after every fired interaction.
    pub fn add_listener(&mut self, listener: impl InteractionListener + 'static) {
        self.listeners.push(listener);
    }

    pub fn listeners_mut(&mut self) -> &mut ListenerChain {
        &mut self.listeners
    }

    pub fn start(&mut self) {
        if !self.running {
            tracing::debug!("interaction controller started");
        }
        self.running = true;
    }

    /// Stops processing, defocusing the current target and discarding any
    /// hold progress.
    pub fn stop(&mut self) {
        self.focus.clear();
        self.trigger.reset();
        if self.running {
            tracing::debug!("interaction controller stopped");
        }
        self.running = false;
    }

    /// Runs one tick. A stopped controller returns an empty report without
    /// calling `hit_test`.
    pub fn tick<F>(
        &mut self,
        dt: Duration,
        hit_test: F,
        input: InputSample,
        key_glyph: &str,
    ) -> TickReport
    where
        F: FnOnce() -> Option<TargetHandle>,
    {
        if !self.running {
            return TickReport::default();
        }

        let focus = self.focus.resolve(hit_test);
        if focus.changed {
            self.trigger.reset();
        }

        let target = focus.current.as_deref();
        let trigger = self.trigger.evaluate(target, input, self.defaults, dt);
        // Composed from the pre-interaction state of the target.
        let display = self.composer.compose(target, &trigger, key_glyph);

        if trigger.fired
            && let Some(target) = target
        {
            tracing::debug!(
                label = %target.prompt_label(),
                mode = %trigger.mode,
                "interaction fired"
            );
            self.listeners.fire(target);
        }

        TickReport {
            focus,
            trigger,
            display,
        }
    }

    pub fn snapshot(&self) -> DebugSnapshot {
        let target = self.focus.current();
        let mode = target
            .map(|t| t.interaction_mode().resolve(self.defaults.mode))
            .unwrap_or(self.defaults.mode);
        let duration = target
            .and_then(|t| t.hold_override())
            .unwrap_or(self.defaults.hold_duration);

        DebugSnapshot {
            running: self.running,
            focused: target.map(|t| t.prompt_label()),
            can_interact: target.is_some_and(|t| t.can_interact()),
            mode,
            hold_timer: self.trigger.timer(),
            hold_progress: if mode.is_hold() {
                hold_progress(self.trigger.timer(), duration)
            } else {
                0.0
            },
        }
    }
}

impl Drop for InteractionController {
    fn drop(&mut self) {
        self.focus.clear();
    }
}

impl std::fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("defaults", &self.defaults)
            .field("running", &self.running)
            .field("focused", &self.focus.current().map(|t| t.prompt_label()))
            .field("hold_timer", &self.trigger.timer())
            .field("listeners", &self.listeners)
            .finish()
    }
}
