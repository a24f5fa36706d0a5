//! Structured logging and secret-scrubbing utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing a helper to keep
//! provider API keys out of logged upstream error bodies.

use crate::config::LoggingConfig;
use crate::error::{BridgeError, Result};
use regex::Regex;
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line human-readable output.
/// - `pretty` (default): Multi-line, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);

    let initialized = match config.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        "compact" => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    initialized.map_err(|e| BridgeError::Internal(format!("Failed to initialize logging: {}", e)))
}

fn secret_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"sk-[A-Za-z0-9_\-]{4,}", "[REDACTED_API_KEY]"),
            (r"(?i)bearer\s+[A-Za-z0-9_\-\.]+", "Bearer [REDACTED]"),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
        .collect()
    })
}

/// Removes provider secrets from a message before it is logged.
///
/// Upstream error bodies sometimes echo the key that was sent
/// (`Incorrect API key provided: sk-...`), so every provider error passes
/// through here when `sanitize_secrets` is on.
pub fn sanitize(input: &str) -> String {
    secret_patterns()
        .iter()
        .fold(input.to_string(), |text, (re, replacement)| {
            re.replace_all(&text, *replacement).into_owned()
        })
}
