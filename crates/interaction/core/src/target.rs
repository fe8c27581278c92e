//! Targetable capability.
//!
//! Hosts expose anything the player can interact with through the
//! [`Targetable`] trait. The controller never owns targets; it keeps a shared
//! [`TargetHandle`] to the one currently in focus and compares handles by
//! identity, not by value.

use std::rc::Rc;
use std::time::Duration;

use crate::mode::InteractionMode;

/// Shared, non-owning (from the controller's point of view) reference to a
/// target supplied by the host.
pub type TargetHandle = Rc<dyn Targetable>;

/// Opaque icon handle. The core passes it through without interpreting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IconId(pub u32);

/// Custom prompt data a target may supply instead of a bare label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PromptDescriptor {
    /// Label shown while the target can be interacted with.
    pub label: String,
    /// Label shown while the target is unavailable.
    pub unavailable_label: String,
    /// When set, the label is shown verbatim instead of through a format string.
    pub is_full_sentence: bool,
    /// When set, the prompt stays visible while the target is unavailable.
    pub show_when_unavailable: bool,
    pub available_icon: Option<IconId>,
    pub unavailable_icon: Option<IconId>,
}

impl PromptDescriptor {
    /// Descriptor used for targets without a custom prompt.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            unavailable_label: label.clone(),
            label,
            ..Self::default()
        }
    }

    /// Picks the label and icon for the given availability.
    #[inline]
    pub fn select(&self, available: bool) -> (&str, Option<IconId>) {
        if available {
            (&self.label, self.available_icon)
        } else {
            (&self.unavailable_label, self.unavailable_icon)
        }
    }
}

/// Capability set of an interactable object.
///
/// Query methods must return immediately; they are called at most a few
/// times per tick. Hooks take `&self` since targets are shared with the host;
/// implementors that track state use interior mutability.
pub trait Targetable {
    /// Short action label, e.g. "Open" or "Pick up".
    fn prompt_label(&self) -> String;

    /// Whether the target accepts an interaction right now.
    fn can_interact(&self) -> bool;

    fn interaction_mode(&self) -> InteractionMode {
        InteractionMode::Inherit
    }

    /// Per-target hold duration, replacing the configured default.
    fn hold_override(&self) -> Option<Duration> {
        None
    }

    /// Custom prompt data. `None` means "use [`Targetable::prompt_label`]".
    fn custom_prompt(&self) -> Option<PromptDescriptor> {
        None
    }

    /// Called when the target gains focus.
    fn on_focus(&self) {}

    /// Called when the target loses focus, or when the controller stops.
    fn on_defocus(&self) {}

    /// Called when a press or a completed hold fires on this target.
    fn interact(&self) {}
}

/// Returns the descriptor the prompt should use for `target`.
pub fn prompt_descriptor(target: &dyn Targetable) -> PromptDescriptor {
    target
        .custom_prompt()
        .unwrap_or_else(|| PromptDescriptor::from_label(target.prompt_label()))
}

/// Identity comparison between two handles.
///
/// Only the data pointer is compared; vtable pointers for the same type may
/// differ between codegen units.
#[inline]
pub fn same_target(a: &TargetHandle, b: &TargetHandle) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Identity comparison for optional handles.
pub fn same_focus(a: Option<&TargetHandle>, b: Option<&TargetHandle>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => same_target(a, b),
        (None, None) => true,
        _ => false,
    }
}
