//! Reticle (crosshair) styling.

use crate::target::IconId;

/// RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Resolved reticle for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReticleView {
    pub icon: Option<IconId>,
    pub tint: Rgba,
    /// Hidden when neither the target nor the style supplies an icon.
    pub visible: bool,
}

/// Default icon and tints applied to the reticle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReticleStyle {
    pub default_icon: Option<IconId>,
    /// Tint while nothing is focused.
    pub default_tint: Rgba,
    pub available_tint: Rgba,
    pub unavailable_tint: Rgba,
}

impl ReticleStyle {
    pub const DEFAULT_TINT: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.75);
    pub const DEFAULT_AVAILABLE_TINT: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.95);
    pub const DEFAULT_UNAVAILABLE_TINT: Rgba = Rgba::new(1.0, 0.35, 0.25, 0.95);

    /// Reticle for a target icon and availability.
    pub fn resolve(&self, icon: Option<IconId>, available: bool) -> ReticleView {
        let icon = icon.or(self.default_icon);
        ReticleView {
            icon,
            tint: if available {
                self.available_tint
            } else {
                self.unavailable_tint
            },
            visible: icon.is_some(),
        }
    }

    /// Reticle shown while nothing is focused: default icon, default tint.
    pub fn idle(&self) -> ReticleView {
        ReticleView {
            icon: self.default_icon,
            tint: self.default_tint,
            visible: self.default_icon.is_some(),
        }
    }
}

impl Default for ReticleStyle {
    fn default() -> Self {
        Self {
            default_icon: None,
            default_tint: Self::DEFAULT_TINT,
            available_tint: Self::DEFAULT_AVAILABLE_TINT,
            unavailable_tint: Self::DEFAULT_UNAVAILABLE_TINT,
        }
    }
}
