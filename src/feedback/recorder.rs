// In-memory feedback log

use crate::metrics;
use crate::utils::clock::Clock;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// A user's reaction to a generated image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    Positive,
    Negative,
    Reported,
    /// Any other non-empty type. Counted in the total only.
    Other(String),
}

impl FeedbackKind {
    /// Parse the wire spelling. Accepts `like`/`positive`,
    /// `dislike`/`negative` and `report`/`reported`, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "like" | "positive" => FeedbackKind::Positive,
            "dislike" | "negative" => FeedbackKind::Negative,
            "report" | "reported" => FeedbackKind::Reported,
            _ => FeedbackKind::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FeedbackKind::Positive => "like",
            FeedbackKind::Negative => "dislike",
            FeedbackKind::Reported => "report",
            FeedbackKind::Other(raw) => raw,
        }
    }

    fn metric_label(&self) -> &'static str {
        match self {
            FeedbackKind::Positive => "positive",
            FeedbackKind::Negative => "negative",
            FeedbackKind::Reported => "reported",
            FeedbackKind::Other(_) => "other",
        }
    }

    fn acknowledgement(&self) -> &'static str {
        match self {
            FeedbackKind::Positive => "Thank you for your positive feedback!",
            FeedbackKind::Negative => "Thank you for your feedback. We will improve.",
            FeedbackKind::Reported => "Issue reported. We will review it.",
            FeedbackKind::Other(_) => "Feedback recorded successfully",
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FeedbackKind {
    fn from(raw: &str) -> Self {
        FeedbackKind::parse(raw)
    }
}

impl Serialize for FeedbackKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FeedbackKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FeedbackKind::parse(&raw))
    }
}

/// One feedback submission. Never mutated after it is logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub target_id: String,
    pub kind: FeedbackKind,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAck {
    pub success: bool,
    pub message: String,
}

/// Aggregated feedback counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackStats {
    pub total: usize,
    pub likes: usize,
    pub dislikes: usize,
    pub reports: usize,
}

/// Append-only feedback log for the lifetime of the process.
#[derive(Debug)]
pub struct FeedbackRecorder {
    log: RwLock<Vec<FeedbackRecord>>,
    clock: Arc<dyn Clock>,
}

impl FeedbackRecorder {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            log: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Append a feedback record. Always succeeds.
    pub fn record(&self, target_id: &str, kind: impl Into<FeedbackKind>) -> FeedbackAck {
        let kind = kind.into();
        info!("Feedback received: {} for image {}", kind, target_id);
        metrics::record_feedback(kind.metric_label());

        let message = kind.acknowledgement().to_string();
        self.log.write().push(FeedbackRecord {
            target_id: target_id.to_string(),
            kind,
            received_at: self.clock.now(),
        });

        FeedbackAck {
            success: true,
            message,
        }
    }

    /// Count of records per kind plus the total.
    pub fn stats(&self) -> FeedbackStats {
        let log = self.log.read();
        log.iter().fold(
            FeedbackStats {
                total: log.len(),
                ..FeedbackStats::default()
            },
            |mut stats, record| {
                match record.kind {
                    FeedbackKind::Positive => stats.likes += 1,
                    FeedbackKind::Negative => stats.dislikes += 1,
                    FeedbackKind::Reported => stats.reports += 1,
                    FeedbackKind::Other(_) => {}
                }
                stats
            },
        )
    }
}
