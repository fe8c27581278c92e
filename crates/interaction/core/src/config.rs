//! Interaction configuration and tunable defaults.
//!
//! Every section deserializes with defaults for missing fields, so a config
//! file only needs to list what it changes.

use std::time::Duration;

use crate::error::ConfigError;
use crate::mode::TriggerMode;
use crate::prompt::ReticleStyle;
use crate::trigger::TriggerDefaults;

/// Complete interaction configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InteractionConfig {
    pub detection: DetectionConfig,
    pub input: InputConfig,
    pub prompt: PromptConfig,
    pub reticle: ReticleStyle,
}

impl InteractionConfig {
    /// Checks that every duration, distance and rate is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("detection.interact_distance", self.detection.interact_distance)?;
        non_negative("detection.sphere_radius", self.detection.sphere_radius)?;
        non_negative("input.hold_duration_secs", self.input.hold_duration_secs)?;
        non_negative("prompt.fade_speed", self.prompt.fade_speed)?;
        Ok(())
    }

    /// Global press/hold defaults derived from the input section.
    pub fn trigger_defaults(&self) -> Result<TriggerDefaults, ConfigError> {
        Ok(TriggerDefaults::new(
            TriggerMode::from_hold_flag(self.input.hold_to_interact),
            self.input.hold_duration()?,
        ))
    }
}

/// Hit-test parameters. The controller never reads these; host hit tests do.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectionConfig {
    /// Maximum distance of the focus query.
    pub interact_distance: f32,
    /// Radius of the swept sphere used by the focus query.
    pub sphere_radius: f32,
    /// Layer bitmask of objects the query may hit.
    pub interactable_mask: u32,
}

impl DetectionConfig {
    pub const DEFAULT_INTERACT_DISTANCE: f32 = 3.0;
    pub const DEFAULT_SPHERE_RADIUS: f32 = 0.05;
    pub const ALL_LAYERS: u32 = u32::MAX;

    /// Whether `layer` (0..32) is included in the mask.
    #[inline]
    pub fn includes_layer(&self, layer: u8) -> bool {
        1u32.checked_shl(u32::from(layer))
            .is_some_and(|bit| self.interactable_mask & bit != 0)
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            interact_distance: Self::DEFAULT_INTERACT_DISTANCE,
            sphere_radius: Self::DEFAULT_SPHERE_RADIUS,
            interactable_mask: Self::ALL_LAYERS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputConfig {
    /// Display name of the interact control, substituted for `{0}`.
    pub interact_key: String,
    /// Default mode for targets that inherit it.
    pub hold_to_interact: bool,
    /// Default hold duration in seconds.
    pub hold_duration_secs: f32,
}

impl InputConfig {
    pub const DEFAULT_INTERACT_KEY: &'static str = "E";
    pub const DEFAULT_HOLD_DURATION_SECS: f32 = 0.5;

    pub fn hold_duration(&self) -> Result<Duration, ConfigError> {
        secs_to_duration("input.hold_duration_secs", self.hold_duration_secs)
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            interact_key: Self::DEFAULT_INTERACT_KEY.to_owned(),
            hold_to_interact: false,
            hold_duration_secs: Self::DEFAULT_HOLD_DURATION_SECS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PromptConfig {
    pub press_format: String,
    pub hold_format: String,
    /// Prompt fade rate in alpha units per second.
    pub fade_speed: f32,
}

impl PromptConfig {
    pub const DEFAULT_PRESS_FORMAT: &'static str = "Press {0} to {1}";
    pub const DEFAULT_HOLD_FORMAT: &'static str = "Hold {0} to {1}";
    pub const DEFAULT_FADE_SPEED: f32 = 12.0;
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            press_format: Self::DEFAULT_PRESS_FORMAT.to_owned(),
            hold_format: Self::DEFAULT_HOLD_FORMAT.to_owned(),
            fade_speed: Self::DEFAULT_FADE_SPEED,
        }
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeOrNonFinite { field, value })
    }
}

/// Converts seconds from a config file into a [`Duration`].
pub fn secs_to_duration(field: &'static str, secs: f32) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f32(secs)
        .map_err(|_| ConfigError::NegativeOrNonFinite { field, value: secs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_settings_asset() {
        let config = InteractionConfig::default();
        assert_eq!(config.detection.interact_distance, 3.0);
        assert_eq!(config.detection.sphere_radius, 0.05);
        assert_eq!(config.input.interact_key, "E");
        assert_eq!(config.prompt.press_format, "Press {0} to {1}");
        assert_eq!(config.prompt.hold_format, "Hold {0} to {1}");

        let defaults = config.trigger_defaults().unwrap();
        assert_eq!(defaults.mode, TriggerMode::Press);
        assert_eq!(defaults.hold_duration, Duration::from_millis(500));
    }

    #[test]
    fn hold_flag_selects_hold_mode() {
        let mut config = InteractionConfig::default();
        config.input.hold_to_interact = true;
        assert_eq!(config.trigger_defaults().unwrap().mode, TriggerMode::Hold);
    }

    #[test]
    fn rejects_negative_values() {
        let mut config = InteractionConfig::default();
        config.input.hold_duration_secs = -1.0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), "input.hold_duration_secs");
        assert!(config.trigger_defaults().is_err());

        let mut config = InteractionConfig::default();
        config.detection.interact_distance = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_hold_is_valid() {
        let mut config = InteractionConfig::default();
        config.input.hold_duration_secs = 0.0;
        assert!(config.validate().is_ok());
        assert_eq!(config.input.hold_duration().unwrap(), Duration::ZERO);
    }

    #[test]
    fn layer_mask() {
        let detection = DetectionConfig {
            interactable_mask: 0b101,
            ..DetectionConfig::default()
        };
        assert!(detection.includes_layer(0));
        assert!(!detection.includes_layer(1));
        assert!(detection.includes_layer(2));
        assert!(!detection.includes_layer(40));
    }
}
