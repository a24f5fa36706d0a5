// Image generator: gloss -> illustration references

use crate::cache::ExpiringCache;
use crate::metrics;
use crate::models::{ImageResult, Sourced};
use crate::provider::AiProvider;
use crate::utils::clock::Clock;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const PLACEHOLDER_BASE_URL: &str = "https://via.placeholder.com/512";

/// Build the illustration prompt for a source text and its gloss.
pub fn image_prompt(text: &str, gloss: &str) -> String {
    format!(
        "Create a clear, professional illustration of Taiwan Sign Language (TSL) hand gesture for: \"{}\".
The image should show:
- A clear hand gesture against a white background
- Professional, educational style
- Front view of the hand sign
- Clean, simple composition
The gesture represents the TSL gloss: {}",
        text, gloss
    )
}

/// Placeholder image URL displaying the gloss as its text.
pub fn placeholder_url(gloss: &str) -> String {
    format!("{}?text={}", PLACEHOLDER_BASE_URL, urlencoding::encode(gloss))
}

/// Time-based image ids with a per-process sequence number, so two images
/// created in the same millisecond still differ.
#[derive(Debug, Default)]
pub struct ImageIds {
    seq: AtomicU64,
}

impl ImageIds {
    pub fn next(&self, now: DateTime<Utc>) -> String {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", now.timestamp_millis(), seq)
    }

    pub fn next_placeholder(&self, now: DateTime<Utc>) -> String {
        format!("mock-{}", self.next(now))
    }
}

/// Generates illustrations for a gloss, consulting a TTL cache keyed by the
/// gloss before calling the provider.
pub struct ImageGenerator {
    provider: Arc<dyn AiProvider>,
    cache: ExpiringCache<Vec<ImageResult>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    ids: ImageIds,
}

impl ImageGenerator {
    pub fn new(
        provider: Arc<dyn AiProvider>,
        cache: ExpiringCache<Vec<ImageResult>>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            provider,
            cache,
            ttl,
            clock,
            ids: ImageIds::default(),
        }
    }

    /// Produce at least one image for `gloss`. Never fails: provider faults
    /// degrade to a single placeholder image, and whichever result is
    /// produced is cached.
    pub async fn generate(&self, source_text: &str, gloss: &str) -> Vec<ImageResult> {
        if let Some(images) = self.cache.get(gloss) {
            debug!("Cache hit for image generation");
            return images;
        }

        let outcome = self.resolve(source_text, gloss).await;
        match &outcome {
            Sourced::Provider(images) => {
                info!("Generated {} image(s) via {}", images.len(), self.provider.name());
            }
            Sourced::Fallback { reason, .. } => {
                warn!("Image generation fell back to placeholder: {}", reason);
                metrics::record_fallback("generate");
            }
        }

        let images = outcome.into_value();
        self.cache.set(gloss, images.clone(), self.ttl);
        images
    }

    /// One provider attempt, folded into a provider or fallback result.
    /// Does not touch the cache.
    pub async fn resolve(&self, source_text: &str, gloss: &str) -> Sourced<Vec<ImageResult>> {
        let prompt = image_prompt(source_text, gloss);

        match self.provider.generate_image(&prompt).await {
            Ok(urls) if !urls.is_empty() => {
                let now = self.clock.now();
                Sourced::Provider(
                    urls.into_iter()
                        .map(|url| ImageResult {
                            id: self.ids.next(now),
                            url,
                            gloss: gloss.to_string(),
                            created_at: now,
                        })
                        .collect(),
                )
            }
            Ok(_) => Sourced::fallback(self.placeholder(gloss), "provider returned no images"),
            Err(e) => Sourced::fallback(self.placeholder(gloss), e.to_string()),
        }
    }

    fn placeholder(&self, gloss: &str) -> Vec<ImageResult> {
        let now = self.clock.now();
        vec![ImageResult {
            id: self.ids.next_placeholder(now),
            url: placeholder_url(gloss),
            gloss: gloss.to_string(),
            created_at: now,
        }]
    }

    pub fn cache(&self) -> &ExpiringCache<Vec<ImageResult>> {
        &self.cache
    }
}
