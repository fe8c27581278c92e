//! Two-placeholder prompt templates.
//!
//! A template such as `"Press {0} to {1}"` is parsed once into segments and
//! rendered every tick with the key glyph and the target label.

use crate::error::TemplateError;

/// Number of positional arguments a prompt template takes.
pub const PLACEHOLDER_COUNT: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Arg(usize),
}

/// Parsed prompt template.
///
/// A template that failed to parse keeps its raw text and renders it
/// unchanged, so a bad configuration string never stops interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptTemplate {
    raw: String,
    segments: Option<Vec<Segment>>,
}

impl PromptTemplate {
    /// Parses `raw`, requiring both `{0}` and `{1}`.
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let segments = parse_segments(raw)?;
        for index in 0..PLACEHOLDER_COUNT {
            if !segments.contains(&Segment::Arg(index)) {
                return Err(TemplateError::MissingPlaceholder(index));
            }
        }

        Ok(Self {
            raw: raw.to_owned(),
            segments: Some(segments),
        })
    }

    /// Parses `raw`, degrading to the raw text with a warning on error.
    pub fn parse_or_raw(raw: &str) -> Self {
        match Self::parse(raw) {
            Ok(template) => template,
            Err(error) => {
                tracing::warn!(template = raw, %error, "invalid prompt template, showing it verbatim");
                Self {
                    raw: raw.to_owned(),
                    segments: None,
                }
            }
        }
    }

    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the template parsed successfully.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.segments.is_some()
    }

    /// Substitutes `{0}` with `key_glyph` and `{1}` with `label`.
    pub fn render(&self, key_glyph: &str, label: &str) -> String {
        let Some(segments) = &self.segments else {
            return self.raw.clone();
        };

        let args = [key_glyph, label];
        let mut out = String::with_capacity(self.raw.len() + key_glyph.len() + label.len());
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Arg(index) => out.push_str(args[*index]),
            }
        }
        out
    }
}

fn parse_segments(raw: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = raw.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' if chars.peek().is_some_and(|&(_, c)| c == '{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek().is_some_and(|&(_, c)| c == '}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(TemplateError::UnbalancedBrace(pos));
                }

                let index = match name.trim().parse::<usize>() {
                    Ok(index) if index < PLACEHOLDER_COUNT => index,
                    _ => return Err(TemplateError::UnknownPlaceholder(name)),
                };
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Arg(index));
            }
            '}' => return Err(TemplateError::UnbalancedBrace(pos)),
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}
