//! HTTP request and response bodies.
//!
//! Request fields are all optional so that a missing field is reported as
//! a descriptive 400 instead of a generic deserialization failure.

use crate::error::{BridgeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `POST /translate` and `POST /translate-complete`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslateRequest {
    pub text: Option<String>,
}

impl TranslateRequest {
    pub fn validate(self) -> Result<String> {
        required(self.text)
            .ok_or_else(|| BridgeError::InvalidRequest("Text is required".to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub gloss: String,
    pub original_text: String,
}

/// `POST /generate`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    pub text: Option<String>,
    pub gloss: Option<String>,
}

impl GenerateRequest {
    /// Returns `(text, gloss)`.
    pub fn validate(self) -> Result<(String, String)> {
        match (required(self.text), required(self.gloss)) {
            (Some(text), Some(gloss)) => Ok((text, gloss)),
            _ => Err(BridgeError::InvalidRequest(
                "Text and gloss are required".to_string(),
            )),
        }
    }
}

/// `POST /postprocess`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostprocessRequest {
    pub images: Option<Value>,
    pub gloss: Option<String>,
}

impl PostprocessRequest {
    /// Returns `(images, gloss)`. The gloss may be absent, in which case it is empty.
    pub fn validate(self) -> Result<(Vec<Value>, String)> {
        match self.images {
            Some(Value::Array(images)) => Ok((images, self.gloss.unwrap_or_default())),
            _ => Err(BridgeError::InvalidRequest(
                "Images array is required".to_string(),
            )),
        }
    }
}

/// Body carrying a list of images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesResponse<T> {
    pub images: Vec<T>,
}

/// `POST /feedback`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackRequest {
    #[serde(rename = "imageId")]
    pub image_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl FeedbackRequest {
    /// Returns `(image_id, kind)`.
    pub fn validate(self) -> Result<(String, String)> {
        match (required(self.image_id), required(self.kind)) {
            (Some(image_id), Some(kind)) => Ok((image_id, kind)),
            _ => Err(BridgeError::InvalidRequest(
                "ImageId and type are required".to_string(),
            )),
        }
    }
}

/// `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// `live` when a provider key is configured, `mock` otherwise.
    pub mode: String,
}

/// Generic acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_rejects_missing_and_blank() {
        assert!(TranslateRequest { text: None }.validate().is_err());
        assert!(TranslateRequest {
            text: Some("  ".to_string())
        }
        .validate()
        .is_err());
        assert_eq!(
            TranslateRequest {
                text: Some("你好".to_string())
            }
            .validate()
            .unwrap(),
            "你好"
        );
    }

    #[test]
    fn test_postprocess_requires_array() {
        let req: PostprocessRequest =
            serde_json::from_str(r#"{"images": "nope", "gloss": "G"}"#).unwrap();
        assert!(req.validate().is_err());

        let req: PostprocessRequest = serde_json::from_str(r#"{"images": []}"#).unwrap();
        let (images, gloss) = req.validate().unwrap();
        assert!(images.is_empty());
        assert_eq!(gloss, "");
    }

    #[test]
    fn test_feedback_field_names() {
        let req: FeedbackRequest =
            serde_json::from_str(r#"{"imageId": "img1", "type": "like"}"#).unwrap();
        assert_eq!(req.validate().unwrap(), ("img1".to_string(), "like".to_string()));
    }
}
