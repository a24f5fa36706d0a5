// CLI module for signbridge

use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// signbridge - text to sign-language gloss and illustration service
#[derive(Parser, Debug, Default)]
#[command(name = "signbridge", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.signbridge/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Never call the provider; serve fallback results only
    #[arg(long)]
    pub mock: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Apply flag overrides on top of loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
