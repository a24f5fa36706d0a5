//! Configuration data structures for the signbridge service.
//!
//! This module defines the schema for the application settings: the HTTP
//! server, the upstream AI provider, cache lifetimes and logging.

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, CORS).
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream text/image provider settings.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Time-to-live settings for the in-memory caches.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `0.0.0.0`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `3001`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to call the API from a browser.
    /// Default: `["http://localhost:3000"]`
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Whether to gzip-compress HTTP responses.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub enable_compression: bool,

    /// Maximum accepted request body size in bytes.
    /// Default: `1048576` (1 MiB)
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

/// Settings for the OpenAI-compatible provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key. When absent the service runs in mock mode and every
    /// result comes from the local fallback path.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the provider API.
    /// Default: `https://api.openai.com/v1`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Model used for gloss translation.
    /// Default: `gpt-4`
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Model used for illustration.
    /// Default: `dall-e-3`
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Requested image resolution.
    /// Default: `1024x1024`
    #[serde(default = "default_image_size")]
    pub image_size: String,

    /// Requested image quality.
    /// Default: `standard`
    #[serde(default = "default_image_quality")]
    pub image_quality: String,

    /// Sampling temperature for gloss translation.
    /// Default: `0.3`
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Completion token cap for gloss translation.
    /// Default: `150`
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds. A timeout counts as a provider fault.
    /// Default: `60`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl ProviderConfig {
    /// Returns the API key if one is set and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Lifetimes of the translation and image caches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Translation cache TTL in milliseconds.
    /// Default: `86400000` (24 hours)
    #[serde(default = "default_translation_ttl")]
    pub translation_ttl_ms: u64,

    /// Image cache TTL in milliseconds.
    /// Default: `3600000` (1 hour)
    #[serde(default = "default_image_ttl")]
    pub image_ttl_ms: u64,

    /// Interval of the background expiry sweep. `0` disables it and
    /// leaves eviction to reads.
    /// Default: `300`
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to mask API keys in logged upstream errors.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub sanitize_secrets: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            enable_compression: true,
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: default_api_base_url(),
            chat_model: default_chat_model(),
            image_model: default_image_model(),
            image_size: default_image_size(),
            image_quality: default_image_quality(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            translation_ttl_ms: default_translation_ttl(),
            image_ttl_ms: default_image_ttl(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            sanitize_secrets: true,
        }
    }
}

// Helper functions for serde defaults
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_body_limit() -> usize {
    1024 * 1024
}

fn default_true() -> bool {
    true
}

fn default_api_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_chat_model() -> String {
    "gpt-4".to_string()
}

fn default_image_model() -> String {
    "dall-e-3".to_string()
}

fn default_image_size() -> String {
    "1024x1024".to_string()
}

fn default_image_quality() -> String {
    "standard".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    150
}

fn default_timeout() -> u64 {
    60
}

fn default_translation_ttl() -> u64 {
    24 * 60 * 60 * 1000
}

fn default_image_ttl() -> u64 {
    60 * 60 * 1000
}

fn default_sweep_interval() -> u64 {
    300
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
