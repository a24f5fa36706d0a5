// Gloss translator: source text -> sign-language gloss

use crate::cache::ExpiringCache;
use crate::metrics;
use crate::models::{Sourced, TranslationEntry};
use crate::provider::{AiProvider, CompletionRequest};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const GLOSS_SYSTEM_PROMPT: &str = "You are an expert in Taiwan Sign Language (TSL). Convert Chinese text to TSL gloss notation.
TSL gloss uses uppercase words representing signs, with linguistic markers like IX (index), CL (classifier), etc.
Example: \"我愛你\" -> \"IX-ME LOVE IX-YOU\"";

/// Build the completion request sent for `text`.
pub fn gloss_request(text: &str) -> CompletionRequest {
    CompletionRequest {
        system: GLOSS_SYSTEM_PROMPT.to_string(),
        user: format!("Convert this Chinese text to TSL gloss notation: \"{}\"", text),
    }
}

/// Placeholder gloss used when the provider cannot be used: each
/// non-whitespace character uppercased, separated by single spaces.
pub fn fallback_gloss(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_uppercase().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Translates source text into gloss, consulting a TTL cache keyed by the
/// source text before calling the provider.
pub struct GlossTranslator {
    provider: Arc<dyn AiProvider>,
    cache: ExpiringCache<TranslationEntry>,
    ttl: Duration,
}

impl GlossTranslator {
    pub fn new(
        provider: Arc<dyn AiProvider>,
        cache: ExpiringCache<TranslationEntry>,
        ttl: Duration,
    ) -> Self {
        Self {
            provider,
            cache,
            ttl,
        }
    }

    /// Translate `source_text`. Never fails: provider faults degrade to
    /// [`fallback_gloss`], and whichever result is produced is cached.
    ///
    /// Blank input must be rejected by the caller.
    pub async fn translate(&self, source_text: &str) -> TranslationEntry {
        if let Some(entry) = self.cache.get(source_text) {
            debug!("Cache hit for gloss translation");
            return entry;
        }

        let outcome = self.resolve(source_text).await;
        match &outcome {
            Sourced::Provider(entry) => {
                info!(
                    "Translated {} chars to gloss via {}",
                    source_text.chars().count(),
                    self.provider.name()
                );
                debug!("Gloss: {}", entry.gloss);
            }
            Sourced::Fallback { reason, .. } => {
                warn!("Gloss translation fell back to placeholder: {}", reason);
                metrics::record_fallback("translate");
            }
        }

        let entry = outcome.into_value();
        self.cache.set(source_text, entry.clone(), self.ttl);
        entry
    }

    /// One provider attempt, folded into a provider or fallback result.
    /// Does not touch the cache.
    pub async fn resolve(&self, source_text: &str) -> Sourced<TranslationEntry> {
        let entry = |gloss: String| TranslationEntry {
            source_text: source_text.to_string(),
            gloss,
        };

        match self.provider.complete(gloss_request(source_text)).await {
            Ok(Some(gloss)) if !gloss.trim().is_empty() => {
                Sourced::Provider(entry(gloss.trim().to_string()))
            }
            Ok(_) => Sourced::fallback(
                entry(fallback_gloss(source_text)),
                "provider returned no completion",
            ),
            Err(e) => Sourced::fallback(entry(fallback_gloss(source_text)), e.to_string()),
        }
    }

    pub fn cache(&self) -> &ExpiringCache<TranslationEntry> {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_gloss_spaces_characters() {
        assert_eq!(fallback_gloss("你好"), "你 好");
        assert_eq!(fallback_gloss("hi there"), "H I T H E R E");
        assert_eq!(fallback_gloss("ß"), "SS");
    }

    #[test]
    fn test_gloss_request_embeds_text() {
        let request = gloss_request("我愛你");
        assert!(request.user.contains("\"我愛你\""));
        assert!(request.system.contains("gloss"));
    }
}
