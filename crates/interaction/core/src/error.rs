//! Error types for interaction-core.
//!
//! Tick processing itself never fails: missing targets and unavailable
//! targets are absent data, degenerate hold durations are clamped, and a bad
//! prompt template falls back to its raw text. Errors only surface when a
//! configuration is validated or when a template is parsed explicitly.

/// Invalid configuration value.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Durations, distances and rates must be finite and non-negative.
    #[error("{field} must be a finite, non-negative number (got {value})")]
    NegativeOrNonFinite { field: &'static str, value: f32 },
}

impl ConfigError {
    /// Name of the offending configuration field.
    pub const fn field(&self) -> &'static str {
        match self {
            ConfigError::NegativeOrNonFinite { field, .. } => field,
        }
    }
}

/// Malformed prompt template.
///
/// Templates use positional placeholders: `{0}` is the key glyph and `{1}`
/// is the label. Literal braces are written `{{` and `}}`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("template is missing placeholder {{{0}}}")]
    MissingPlaceholder(usize),

    #[error("template references unknown placeholder {{{0}}}")]
    UnknownPlaceholder(String),

    #[error("unbalanced brace at byte {0}")]
    UnbalancedBrace(usize),
}
