//! Text-to-gloss translation.
//!
//! [`GlossTranslator`] wraps the provider's chat completion with a TTL cache
//! and a deterministic fallback, so a translation request always yields a
//! gloss.

mod translator;

pub use translator::{fallback_gloss, gloss_request, GlossTranslator};
