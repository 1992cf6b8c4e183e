//! Request/response payloads for the chat-completions API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize)]
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
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: String,
}

/// Error body shape used by the chat API.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatErrorResponse {
    pub error: ChatErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_parsing() {
        let body = r#"{
            "choices": [
                { "message": { "role": "assistant", "content": "enthusiasm" } }
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, "enthusiasm");
    }

    #[test]
    fn test_chat_error_parsing() {
        let body = r#"{
            "error": { "message": "Invalid API key", "type": "authentication_error" }
        }"#;

        let error: ChatErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(error.error.message, "Invalid API key");
        assert_eq!(
            error.error.error_type.as_deref(),
            Some("authentication_error")
        );
    }
}
