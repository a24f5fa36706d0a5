//! Data models for the signbridge service.
//!
//! - `api`: HTTP request/response bodies and their boundary validation.
//! - `domain`: Records produced by the pipeline and held in caches.
//! - `outcome`: The provider-or-fallback result type.

pub mod api;
pub mod domain;
pub mod outcome;

pub use domain::{CompleteResult, ImageResult, TranslationEntry};
pub use outcome::Sourced;
