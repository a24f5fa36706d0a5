// Shared test doubles
#![allow(dead_code)]

use async_trait::async_trait;
use signbridge::config::CacheConfig;
use signbridge::error::{BridgeError, Result};
use signbridge::pipeline::SignPipeline;
use signbridge::provider::{AiProvider, CompletionRequest};
use signbridge::utils::ManualClock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Provider that answers from fixed values and counts every call.
#[derive(Debug, Default)]
pub struct CountingProvider {
    pub gloss: Option<String>,
    pub image_urls: Vec<String>,
    pub fail: bool,
    pub completions: AtomicUsize,
    pub images: AtomicUsize,
}

impl CountingProvider {
    pub fn answering(gloss: &str, url: &str) -> Self {
        Self {
            gloss: Some(gloss.to_string()),
            image_urls: vec![url.to_string()],
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn completion_calls(&self) -> usize {
        self.completions.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.images.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiProvider for CountingProvider {
    fn name(&self) -> &str {
        "counting"
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<Option<String>> {
        self.completions.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(BridgeError::Provider("HTTP 503: upstream unavailable".to_string()));
        }
        Ok(self.gloss.clone())
    }

    async fn generate_image(&self, _prompt: &str) -> Result<Vec<String>> {
        self.images.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(BridgeError::Provider("HTTP 429: rate limited".to_string()));
        }
        Ok(self.image_urls.clone())
    }
}

/// Pipeline over `provider` on a manual clock with the default TTLs.
pub fn pipeline_with(provider: Arc<CountingProvider>) -> (SignPipeline, ManualClock) {
    let clock = ManualClock::default();
    let pipeline =
        SignPipeline::with_clock(provider, &CacheConfig::default(), Arc::new(clock.clone()));
    (pipeline, clock)
}
