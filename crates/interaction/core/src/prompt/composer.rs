//! Prompt composition.
//!
//! Turns the focused target and the tick's [`TriggerResult`] into a
//! [`DisplayMessage`]. No widget is touched; the host renders the message.

use crate::mode::TriggerMode;
use crate::prompt::template::PromptTemplate;
use crate::target::{IconId, Targetable, prompt_descriptor};
use crate::trigger::TriggerResult;

/// Text and indicators the host should display this tick.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayMessage {
    pub text: String,
    /// Fill amount for a hold indicator, passed through from the trigger.
    pub progress: f32,
    /// Reticle icon chosen by the target, if any.
    pub icon: Option<IconId>,
    /// Whether the target could be interacted with this tick.
    pub available: bool,
}

/// Prompt composer with pre-parsed press and hold templates.
#[derive(Clone, Debug)]
pub struct PromptComposer {
    press: PromptTemplate,
    hold: PromptTemplate,
}

impl PromptComposer {
    /// Parses both templates. Invalid ones degrade to their raw text.
    pub fn new(press_format: &str, hold_format: &str) -> Self {
        Self {
            press: PromptTemplate::parse_or_raw(press_format),
            hold: PromptTemplate::parse_or_raw(hold_format),
        }
    }

    pub fn press_template(&self) -> &PromptTemplate {
        &self.press
    }

    pub fn hold_template(&self) -> &PromptTemplate {
        &self.hold
    }

    /// Builds the display message, or `None` when nothing should be shown.
    pub fn compose(
        &self,
        target: Option<&dyn Targetable>,
        result: &TriggerResult,
        key_glyph: &str,
    ) -> Option<DisplayMessage> {
        let target = target?;
        let available = target.can_interact();
        let descriptor = prompt_descriptor(target);

        if !available && !descriptor.show_when_unavailable {
            return None;
        }

        let (label, icon) = descriptor.select(available);
        let text = if descriptor.is_full_sentence {
            label.to_owned()
        } else {
            let template = match result.mode {
                TriggerMode::Hold => &self.hold,
                TriggerMode::Press => &self.press,
            };
            template.render(key_glyph, label)
        };

        Some(DisplayMessage {
            text,
            progress: result.progress,
            icon,
            available,
        })
    }
}

/// One-shot composition with unparsed format strings.
///
/// Prefer [`PromptComposer`] when composing every tick.
pub fn compose(
    target: Option<&dyn Targetable>,
    result: &TriggerResult,
    key_glyph: &str,
    press_format: &str,
    hold_format: &str,
) -> Option<DisplayMessage> {
    PromptComposer::new(press_format, hold_format).compose(target, result, key_glyph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::PromptDescriptor;

    struct Door {
        locked: bool,
        descriptor: Option<PromptDescriptor>,
    }

    impl Targetable for Door {
        fn prompt_label(&self) -> String {
            "Open".into()
        }

        fn can_interact(&self) -> bool {
            !self.locked
        }

        fn custom_prompt(&self) -> Option<PromptDescriptor> {
            self.descriptor.clone()
        }
    }

    fn keycard_prompt(show_when_unavailable: bool) -> PromptDescriptor {
        PromptDescriptor {
            label: "Open".into(),
            unavailable_label: "Locked, requires Red Keycard".into(),
            is_full_sentence: false,
            show_when_unavailable,
            available_icon: Some(IconId(1)),
            unavailable_icon: Some(IconId(2)),
        }
    }

    fn press() -> TriggerResult {
        TriggerResult::default()
    }

    fn composer() -> PromptComposer {
        PromptComposer::new("Press {0} to {1}", "Hold {0} to {1}")
    }

    #[test]
    fn no_target_no_message() {
        assert_eq!(composer().compose(None, &press(), "E"), None);
    }

    #[test]
    fn press_format_for_press_mode() {
        let door = Door {
            locked: false,
            descriptor: None,
        };
        let message = composer().compose(Some(&door), &press(), "E").unwrap();
        assert_eq!(message.text, "Press E to Open");
        assert!(message.available);
        assert_eq!(message.icon, None);
    }

    #[test]
    fn hold_format_and_progress_pass_through() {
        let door = Door {
            locked: false,
            descriptor: Some(keycard_prompt(false)),
        };
        let result = TriggerResult {
            fired: false,
            progress: 0.4,
            mode: TriggerMode::Hold,
        };
        let message = composer().compose(Some(&door), &result, "F").unwrap();
        assert_eq!(message.text, "Hold F to Open");
        assert_eq!(message.progress, 0.4);
        assert_eq!(message.icon, Some(IconId(1)));
    }

    #[test]
    fn unavailable_suppressed_by_default() {
        let plain = Door {
            locked: true,
            descriptor: None,
        };
        let custom = Door {
            locked: true,
            descriptor: Some(keycard_prompt(false)),
        };
        assert_eq!(composer().compose(Some(&plain), &press(), "E"), None);
        assert_eq!(composer().compose(Some(&custom), &press(), "E"), None);
    }

    #[test]
    fn unavailable_shown_when_requested() {
        let door = Door {
            locked: true,
            descriptor: Some(keycard_prompt(true)),
        };
        let message = composer().compose(Some(&door), &press(), "E").unwrap();
        assert_eq!(message.text, "Press E to Locked, requires Red Keycard");
        assert!(!message.available);
        assert_eq!(message.icon, Some(IconId(2)));
    }

    #[test]
    fn full_sentence_bypasses_format() {
        let mut descriptor = keycard_prompt(false);
        descriptor.label = "Read the ancient inscription".into();
        descriptor.is_full_sentence = true;
        let door = Door {
            locked: false,
            descriptor: Some(descriptor),
        };

        let message = compose(Some(&door), &press(), "E", "{1}!!{0}", "bogus").unwrap();
        assert_eq!(message.text, "Read the ancient inscription");
    }

    #[test]
    fn malformed_format_shows_raw_template() {
        let door = Door {
            locked: false,
            descriptor: None,
        };
        let message = compose(Some(&door), &press(), "E", "Press to {1", "Hold {0} to {1}").unwrap();
        assert_eq!(message.text, "Press to {1");
    }
}
