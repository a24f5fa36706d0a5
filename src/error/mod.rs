// Error types for the signbridge service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Provider not configured: no API key set")]
    ProviderNotConfigured,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BridgeError {
    /// HTTP status and error type label used when rendering this error.
    pub fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            BridgeError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request_error"),
            BridgeError::Provider(_) | BridgeError::ProviderNotConfigured => {
                (StatusCode::BAD_GATEWAY, "provider_error")
            }
            BridgeError::Config(_) | BridgeError::ConfigParsing(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "api_error"),
        }
    }
}

// Convert BridgeError to HTTP responses for Axum
impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", message);
        }

        let body = json!({
            "type": "error",
            "error": {
                "type": error_type,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
