// HTTP request handlers

use super::routes::AppState;
use crate::error::{BridgeError, Result};
use crate::feedback::{FeedbackAck, FeedbackStats};
use crate::imaging::ProcessedImage;
use crate::models::api::{
    FeedbackRequest, GenerateRequest, HealthResponse, ImagesResponse, PostprocessRequest,
    SuccessResponse, TranslateRequest, TranslateResponse,
};
use crate::models::{CompleteResult, ImageResult};
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Deserialize a raw JSON body, reporting malformed input as a client error.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        debug!(
            "Rejected request body (first 200 chars): {}",
            body.chars().take(200).collect::<String>()
        );
        BridgeError::InvalidRequest(format!("JSON deserialization error: {}", e))
    })
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mode = if state.pipeline.is_live() { "live" } else { "mock" };

    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: state.pipeline.now(),
        mode: mode.to_string(),
    })
}

/// Handler for `POST /translate`
pub async fn translate_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<TranslateResponse>> {
    let text = parse_body::<TranslateRequest>(&body)?.validate()?;
    info!("POST /translate - {} chars", text.chars().count());

    let entry = state.pipeline.translate(&text).await;

    Ok(Json(TranslateResponse {
        gloss: entry.gloss,
        original_text: entry.source_text,
    }))
}

/// Handler for `POST /generate`
pub async fn generate_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImagesResponse<ImageResult>>> {
    let (text, gloss) = parse_body::<GenerateRequest>(&body)?.validate()?;
    info!("POST /generate - gloss: {}", gloss);

    let images = state.pipeline.generate(&text, &gloss).await;

    Ok(Json(ImagesResponse { images }))
}

/// Handler for `POST /postprocess`
pub async fn postprocess_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImagesResponse<ProcessedImage>>> {
    let (images, gloss) = parse_body::<PostprocessRequest>(&body)?.validate()?;
    info!("POST /postprocess - {} image(s)", images.len());

    let images = state.pipeline.postprocess(&images, &gloss);

    Ok(Json(ImagesResponse { images }))
}

/// Handler for `POST /translate-complete`
pub async fn translate_complete_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<CompleteResult>> {
    let text = parse_body::<TranslateRequest>(&body)?.validate()?;
    info!("POST /translate-complete - {} chars", text.chars().count());

    Ok(Json(state.pipeline.translate_complete(&text).await))
}

/// Handler for `POST /feedback`
pub async fn feedback_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<FeedbackAck>> {
    let (image_id, kind) = parse_body::<FeedbackRequest>(&body)?.validate()?;

    Ok(Json(state.pipeline.record_feedback(&image_id, kind.as_str())))
}

/// Handler for `GET /stats`
pub async fn stats_handler(State(state): State<AppState>) -> Json<FeedbackStats> {
    Json(state.pipeline.feedback_stats())
}

/// Handler for `POST /cache/clear`
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<SuccessResponse> {
    state.pipeline.clear_caches();
    Json(SuccessResponse { success: true })
}

/// Handler for `GET /metrics` (Prometheus text format)
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
}
