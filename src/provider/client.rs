// OpenAI-compatible HTTP client

use super::models::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ImageGenerationRequest,
    ImageGenerationResponse,
};
use super::{AiProvider, CompletionRequest};
use crate::config::ProviderConfig;
use crate::error::{BridgeError, Result};
use crate::metrics;
use crate::utils::logging::sanitize;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Client for an OpenAI-compatible API.
///
/// Every call is a single attempt: failures are returned to the caller,
/// which decides how to degrade.
pub struct OpenAiClient {
    http_client: Client,
    config: ProviderConfig,
    api_key: String,
    sanitize_errors: bool,
}

impl OpenAiClient {
    /// Build a client from configuration. Fails if no API key is set.
    pub fn new(config: &ProviderConfig, sanitize_errors: bool) -> Result<Self> {
        let api_key = config
            .api_key()
            .ok_or(BridgeError::ProviderNotConfigured)?
            .to_string();

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .use_rustls_tls()
            .build()
            .map_err(|e| BridgeError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created provider HTTP client for {}", config.api_base_url);

        Ok(Self {
            http_client,
            config: config.clone(),
            api_key,
            sanitize_errors,
        })
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &str {
        self.config.api_base_url.trim_end_matches('/')
    }

    async fn post<Req, Resp>(&self, operation: &str, path: &str, body: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Calling provider {} at {}", operation, url);

        let start = Instant::now();
        let outcome = self.send(&url, body).await;
        metrics::record_provider_call(operation, outcome.is_ok(), start.elapsed().as_secs_f64());

        outcome.map_err(|e| {
            let message = if self.sanitize_errors {
                sanitize(&e.to_string())
            } else {
                e.to_string()
            };
            error!("Provider {} failed: {}", operation, message);
            BridgeError::Provider(message)
        })
    }

    async fn send<Req, Resp>(&self, url: &str, body: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            let error_msg =
                Self::extract_error_message(&response_text).unwrap_or(response_text);
            return Err(BridgeError::Provider(format!("HTTP {}: {}", status, error_msg)));
        }

        Ok(serde_json::from_str(&response_text)?)
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            code: Option<String>,
        }

        serde_json::from_str::<ErrorResponse>(response_text)
            .ok()
            .and_then(|resp| resp.error)
            .and_then(|error| error.message.or(error.code))
    }
}

#[async_trait]
impl AiProvider for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>> {
        let body = ChatCompletionRequest {
            model: self.config.chat_model.clone(),
            messages: vec![
                ChatMessage::system(request.system),
                ChatMessage::user(request.user),
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response: ChatCompletionResponse =
            self.post("completion", "/chat/completions", &body).await?;
        Ok(response.first_text())
    }

    async fn generate_image(&self, prompt: &str) -> Result<Vec<String>> {
        let body = ImageGenerationRequest {
            model: self.config.image_model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size: self.config.image_size.clone(),
            quality: self.config.image_quality.clone(),
        };

        let response: ImageGenerationResponse =
            self.post("image", "/images/generations", &body).await?;
        Ok(response.data.iter().filter_map(|image| image.reference()).collect())
    }
}
