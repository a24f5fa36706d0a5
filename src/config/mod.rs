// Configuration module

mod models;

pub use models::*;

use crate::error::{BridgeError, Result};
use config::{Config, Environment, File};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

impl ServerConfig {
    /// Listen address built from `host` and `port`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse().map_err(|e| {
            BridgeError::Config(format!(
                "server.host must be an IP address, got '{}': {}",
                self.host, e
            ))
        })
    }
}

impl AppConfig {
    /// Load configuration from the default file location.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from multiple sources with precedence:
    /// 1. Deployment variables `OPENAI_API_KEY`, `PORT`, `FRONTEND_URL` (highest)
    /// 2. Environment variables (`SIGNBRIDGE__SECTION__KEY`)
    /// 3. Config file (`path`, or `~/.signbridge/config.toml`)
    /// 4. Defaults (lowest)
    ///
    /// CLI flags are applied on top by the caller.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        let frontend_origins = std::env::var("FRONTEND_URL").ok().map(|raw| {
            raw.split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect::<Vec<_>>()
        });

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists; an explicit path is required
            .add_source(File::from(file_path).required(path.is_some()))
            // Override with environment variables (prefix: SIGNBRIDGE__)
            .add_source(
                Environment::with_prefix("SIGNBRIDGE")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("provider.api_key", std::env::var("OPENAI_API_KEY").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("server.allowed_origins", frontend_origins)?
            .build()
            .map_err(|e| BridgeError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| BridgeError::Config(e.to_string()))
    }

    /// Copy of the configuration safe to print or log.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.provider.api_key.is_some() {
            copy.provider.api_key = Some("[REDACTED]".to_string());
        }
        copy
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".signbridge")
            .join("config.toml")
    }
}
