//! The translate → generate → postprocess pipeline and its shared stores.
//!
//! [`SignPipeline`] owns every piece of process-lifetime state: both caches
//! and the feedback log. It is built once at startup and shared by all
//! requests; nothing lives in globals apart from metrics.

use crate::cache::{ExpiringCache, Sweep};
use crate::config::CacheConfig;
use crate::feedback::{FeedbackAck, FeedbackKind, FeedbackRecorder, FeedbackStats};
use crate::imaging::{ImageGenerator, Postprocessor, ProcessedImage};
use crate::models::{CompleteResult, ImageResult, TranslationEntry};
use crate::provider::AiProvider;
use crate::translation::GlossTranslator;
use crate::utils::clock::{Clock, SystemClock};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct SignPipeline {
    translator: GlossTranslator,
    generator: ImageGenerator,
    postprocessor: Postprocessor,
    feedback: FeedbackRecorder,
    clock: Arc<dyn Clock>,
    live: bool,
}

impl SignPipeline {
    /// Build the pipeline on the wall clock.
    pub fn new(provider: Arc<dyn AiProvider>, cache: &CacheConfig) -> Self {
        Self::with_clock(provider, cache, Arc::new(SystemClock))
    }

    pub fn with_clock(
        provider: Arc<dyn AiProvider>,
        cache: &CacheConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let live = provider.is_live();

        let translator = GlossTranslator::new(
            provider.clone(),
            ExpiringCache::with_clock("translation", clock.clone()),
            Duration::from_millis(cache.translation_ttl_ms),
        );
        let generator = ImageGenerator::new(
            provider,
            ExpiringCache::with_clock("image", clock.clone()),
            Duration::from_millis(cache.image_ttl_ms),
            clock.clone(),
        );

        Self {
            translator,
            generator,
            postprocessor: Postprocessor::new(clock.clone()),
            feedback: FeedbackRecorder::new(clock.clone()),
            clock,
            live,
        }
    }

    /// Whether results can come from a real provider.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Current time on the pipeline's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub async fn translate(&self, text: &str) -> TranslationEntry {
        self.translator.translate(text).await
    }

    pub async fn generate(&self, text: &str, gloss: &str) -> Vec<ImageResult> {
        self.generator.generate(text, gloss).await
    }

    pub fn postprocess<T: Serialize>(&self, images: &[T], gloss: &str) -> Vec<ProcessedImage> {
        self.postprocessor.process(images, gloss)
    }

    /// Translate, then illustrate the resulting gloss, as one sequence.
    pub async fn translate_complete(&self, text: &str) -> CompleteResult {
        let entry = self.translate(text).await;
        let images = self.generate(text, &entry.gloss).await;
        let image_url = images
            .into_iter()
            .next()
            .map(|image| image.url)
            .unwrap_or_default();

        CompleteResult {
            original_text: entry.source_text,
            gloss: entry.gloss,
            image_url,
            timestamp: self.clock.now(),
        }
    }

    pub fn record_feedback(&self, target_id: &str, kind: impl Into<FeedbackKind>) -> FeedbackAck {
        self.feedback.record(target_id, kind)
    }

    pub fn feedback_stats(&self) -> FeedbackStats {
        self.feedback.stats()
    }

    /// Drop every cached translation and image.
    pub fn clear_caches(&self) {
        self.translator.cache().clear();
        self.generator.cache().clear();
        info!("Translation and image caches cleared");
    }

    /// Caches for the background sweeper.
    pub fn sweep_targets(&self) -> Vec<Arc<dyn Sweep>> {
        vec![
            Arc::new(self.translator.cache().clone()),
            Arc::new(self.generator.cache().clone()),
        ]
    }

    pub fn translation_cache(&self) -> &ExpiringCache<TranslationEntry> {
        self.translator.cache()
    }

    pub fn image_cache(&self) -> &ExpiringCache<Vec<ImageResult>> {
        self.generator.cache()
    }
}
