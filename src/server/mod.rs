//! Axum-based HTTP server for the signbridge service.
//!
//! This module exposes the pipeline to the browser UI: translation,
//! illustration, postprocessing, feedback and health/stat endpoints.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual endpoints and boundary validation.
//! - `middleware`: Request ID tracking and CORS.
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
