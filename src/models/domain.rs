//! Core records produced by the gloss/illustration pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A source text and the gloss produced for it.
///
/// Immutable once cached; it leaves the cache only by expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEntry {
    pub source_text: String,
    pub gloss: String,
}

/// One generated (or placeholder) illustration for a gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    pub id: String,
    pub url: String,
    pub gloss: String,
    pub created_at: DateTime<Utc>,
}

/// Result of the composed translate-then-generate run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteResult {
    pub original_text: String,
    pub gloss: String,
    pub image_url: String,
    pub timestamp: DateTime<Utc>,
}
