// HTTP routes configuration

use super::handlers::{
    clear_cache_handler, feedback_handler, generate_handler, health_handler, metrics_handler,
    postprocess_handler, stats_handler, translate_complete_handler, translate_handler,
};
use super::middleware::{cors_layer, request_id_layers};
use crate::config::AppConfig;
use crate::error::Result;
use crate::pipeline::SignPipeline;
use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SignPipeline>,
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .route("/translate", post(translate_handler))
        .route("/generate", post(generate_handler))
        .route("/postprocess", post(postprocess_handler))
        .route("/translate-complete", post(translate_complete_handler))
        .route("/feedback", post(feedback_handler))
        .route("/cache/clear", post(clear_cache_handler))
}

/// Build the application router. Every API route is served both at the
/// root and under `/api`.
pub fn create_router(config: AppConfig, pipeline: Arc<SignPipeline>) -> Result<Router> {
    let cors = cors_layer(&config.server.allowed_origins)?;
    let body_limit = config.server.body_limit_bytes;
    let compress = config.server.enable_compression;

    let state = AppState { pipeline };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let mut app = Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
        .route("/metrics", get(metrics_handler))
        .layer(tower_http::limit::RequestBodyLimitLayer::new(body_limit))
        .layer(cors);

    if compress {
        app = app.layer(CompressionLayer::new());
    }

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
