// signbridge - text to sign-language gloss and illustration service

use anyhow::Result;
use clap::Parser;
use signbridge::cache::spawn_sweeper;
use signbridge::cli::Args;
use signbridge::config::AppConfig;
use signbridge::pipeline::SignPipeline;
use signbridge::provider;
use signbridge::server::create_router;
use signbridge::utils::logging;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration (.env first so it feeds the environment layer)
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Ignoring unreadable .env file: {}", e);
        }
    }
    let mut config = AppConfig::load_from(args.config.as_deref())?;
    args.apply(&mut config);

    if args.print_config {
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting signbridge v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build provider and pipeline
    let provider = provider::from_config(
        &config.provider,
        config.logging.sanitize_secrets,
        args.mock,
    )?;
    if !provider.is_live() {
        warn!("Running in mock mode: all translations and images are placeholders");
    }
    let pipeline = Arc::new(SignPipeline::new(provider, &config.cache));

    // Phase 4: Background cache sweep
    let sweeper = spawn_sweeper(
        pipeline.sweep_targets(),
        Duration::from_secs(config.cache.sweep_interval_seconds),
    );

    // Phase 5: Build and start HTTP server
    info!("Allowed origins: {}", config.server.allowed_origins.join(", "));
    let addr = config.server.socket_addr()?;
    let app = create_router(config, pipeline)?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(sweeper) = sweeper {
        sweeper.abort();
    }

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
