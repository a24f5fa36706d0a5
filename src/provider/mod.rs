//! Upstream AI provider seam.
//!
//! The translator and generator talk to the provider only through
//! [`AiProvider`]. Two implementations exist:
//!
//! - `OpenAiClient`: an OpenAI-compatible HTTP API.
//! - `OfflineProvider`: used when no API key is configured; every call
//!   fails, so callers serve their fallback results.

mod client;
pub mod models;

pub use client::OpenAiClient;

use crate::config::ProviderConfig;
use crate::error::{BridgeError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Inputs for a single chat completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
}

#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &str;

    /// Whether calls can reach a real provider.
    fn is_live(&self) -> bool {
        true
    }

    /// Run a chat completion and return the first choice's text, trimmed,
    /// or `None` when the provider returned nothing usable.
    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>>;

    /// Generate one image and return its references (URLs).
    async fn generate_image(&self, prompt: &str) -> Result<Vec<String>>;
}

/// Provider used in mock mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineProvider;

#[async_trait]
impl AiProvider for OfflineProvider {
    fn name(&self) -> &str {
        "offline"
    }

    fn is_live(&self) -> bool {
        false
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<Option<String>> {
        Err(BridgeError::ProviderNotConfigured)
    }

    async fn generate_image(&self, _prompt: &str) -> Result<Vec<String>> {
        Err(BridgeError::ProviderNotConfigured)
    }
}

/// Build the provider for this process: the HTTP client when a key is set
/// and mock mode is not forced, otherwise the offline provider.
pub fn from_config(
    config: &ProviderConfig,
    sanitize_errors: bool,
    force_mock: bool,
) -> Result<Arc<dyn AiProvider>> {
    if force_mock {
        info!("Mock mode requested; provider calls disabled");
        return Ok(Arc::new(OfflineProvider));
    }

    match config.api_key() {
        Some(_) => {
            info!("Using provider at {}", config.api_base_url);
            Ok(Arc::new(OpenAiClient::new(config, sanitize_errors)?))
        }
        None => {
            warn!("No provider API key configured. Using mock mode.");
            Ok(Arc::new(OfflineProvider))
        }
    }
}
