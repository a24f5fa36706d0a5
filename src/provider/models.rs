//! Wire types for the OpenAI-compatible chat completion and image APIs.

use serde::{Deserialize, Serialize};

/// `POST /chat/completions` request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// `POST /chat/completions` response body. Only the fields read here are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, trimmed. `None` if absent or blank.
    pub fn first_text(&self) -> Option<String> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }
}

/// `POST /images/generations` request body.
#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub n: u32,
    pub size: String,
    pub quality: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
    pub b64_json: Option<String>,
}

impl ImageData {
    /// A URL the browser can load: the hosted URL, or an inline data URL
    /// when the provider returned base64.
    pub fn reference(&self) -> Option<String> {
        match (&self.url, &self.b64_json) {
            (Some(url), _) if !url.is_empty() => Some(url.clone()),
            (_, Some(b64)) if !b64.is_empty() => Some(format!("data:image/png;base64,{}", b64)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_text_trims_and_skips_blank() {
        let resp: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  IX-ME LOVE IX-YOU \n"}}]}"#,
        )
        .unwrap();
        assert_eq!(resp.first_text().as_deref(), Some("IX-ME LOVE IX-YOU"));

        let blank: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"   "}}]}"#).unwrap();
        assert_eq!(blank.first_text(), None);

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(empty.first_text(), None);
    }

    #[test]
    fn test_image_reference_prefers_url() {
        let hosted = ImageData {
            url: Some("https://img/1.png".to_string()),
            b64_json: Some("AAAA".to_string()),
        };
        assert_eq!(hosted.reference().as_deref(), Some("https://img/1.png"));

        let inline = ImageData {
            url: None,
            b64_json: Some("AAAA".to_string()),
        };
        assert_eq!(inline.reference().as_deref(), Some("data:image/png;base64,AAAA"));

        let nothing = ImageData {
            url: None,
            b64_json: None,
        };
        assert_eq!(nothing.reference(), None);
    }
}
