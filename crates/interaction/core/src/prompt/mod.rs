//! Prompt presentation: text composition, reticle styling and fade.
//!
//! Nothing here owns a widget. Each type produces plain data that the host
//! renders however it likes.

pub mod composer;
pub mod fader;
pub mod reticle;
pub mod template;

pub use composer::{DisplayMessage, PromptComposer, compose};
pub use fader::PromptFader;
pub use reticle::{ReticleStyle, ReticleView, Rgba};
pub use template::PromptTemplate;
