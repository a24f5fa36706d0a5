// Image postprocessing: metadata stamping

use crate::utils::clock::Clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Version tag stamped on every processed image.
pub const PROCESSING_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingMetadata {
    pub gloss: String,
    pub processed_at: DateTime<Utc>,
    pub version: String,
}

/// An image record with its original fields preserved and a processing
/// marker attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedImage {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub processed: bool,
    pub metadata: ProcessingMetadata,
}

/// Attaches processing metadata to image records. Pure apart from reading
/// the clock; no cache access and no failure mode.
#[derive(Debug, Clone)]
pub struct Postprocessor {
    clock: Arc<dyn Clock>,
}

impl Postprocessor {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Stamp every image with `processed: true` and metadata for `gloss`.
    ///
    /// Object records keep their fields; anything else becomes a record
    /// carrying only the marker and metadata. The output has one entry per
    /// input entry.
    pub fn process<T: Serialize>(&self, images: &[T], gloss: &str) -> Vec<ProcessedImage> {
        let processed_at = self.clock.now();

        images
            .iter()
            .map(|image| {
                let mut fields = match serde_json::to_value(image) {
                    Ok(Value::Object(fields)) => fields,
                    _ => Map::new(),
                };
                // Re-processing replaces the previous stamp
                fields.remove("processed");
                fields.remove("metadata");

                ProcessedImage {
                    fields,
                    processed: true,
                    metadata: ProcessingMetadata {
                        gloss: gloss.to_string(),
                        processed_at,
                        version: PROCESSING_VERSION.to_string(),
                    },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::ManualClock;
    use serde_json::json;

    #[test]
    fn test_process_keeps_fields_and_stamps_metadata() {
        let clock = ManualClock::default();
        let postprocessor = Postprocessor::new(Arc::new(clock.clone()));

        let out = postprocessor.process(&[json!({"id": "x", "url": "u"})], "G");
        assert_eq!(out.len(), 1);
        assert!(out[0].processed);
        assert_eq!(out[0].metadata.gloss, "G");
        assert_eq!(out[0].metadata.version, "1.0");
        assert_eq!(out[0].metadata.processed_at, clock.now());
        assert_eq!(out[0].fields["id"], "x");

        let body = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(body["url"], "u");
        assert_eq!(body["processed"], true);
        assert_eq!(body["metadata"]["gloss"], "G");
    }

    #[test]
    fn test_non_object_entries_keep_shape() {
        let postprocessor = Postprocessor::new(Arc::new(ManualClock::default()));
        let out = postprocessor.process(&[json!("not-an-object"), json!(null)], "G");
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|image| image.fields.is_empty() && image.processed));

        let empty: Vec<Value> = Vec::new();
        assert!(postprocessor.process(&empty, "G").is_empty());
    }

    #[test]
    fn test_reprocessing_replaces_stamp() {
        let postprocessor = Postprocessor::new(Arc::new(ManualClock::default()));
        let first = postprocessor.process(&[json!({"id": "x"})], "OLD");
        let second = postprocessor.process(&first, "NEW");

        let body = serde_json::to_string(&second[0]).unwrap();
        assert_eq!(body.matches("\"metadata\"").count(), 1);
        assert_eq!(second[0].metadata.gloss, "NEW");
    }
}
