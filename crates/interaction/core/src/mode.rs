//! Interaction modes.
//!
//! A target states a [`InteractionMode`] preference; the controller turns it
//! into a concrete [`TriggerMode`] using the global default.

/// Mode preference reported by a target.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InteractionMode {
    /// Use whatever the interactor is configured with.
    #[default]
    Inherit,
    /// Fire on a single input edge.
    Press,
    /// Fire after the input has been held for the hold duration.
    Hold,
}

impl InteractionMode {
    /// Resolves this preference against the global default.
    #[inline]
    pub const fn resolve(self, default_mode: TriggerMode) -> TriggerMode {
        match self {
            InteractionMode::Inherit => default_mode,
            InteractionMode::Press => TriggerMode::Press,
            InteractionMode::Hold => TriggerMode::Hold,
        }
    }
}

/// Effective mode used by the trigger evaluator for one tick.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TriggerMode {
    #[default]
    Press,
    Hold,
}

impl TriggerMode {
    /// Maps the settings flag `hold_to_interact` to a default mode.
    #[inline]
    pub const fn from_hold_flag(hold_to_interact: bool) -> Self {
        if hold_to_interact {
            TriggerMode::Hold
        } else {
            TriggerMode::Press
        }
    }

    #[inline]
    pub const fn is_hold(self) -> bool {
        matches!(self, TriggerMode::Hold)
    }
}
