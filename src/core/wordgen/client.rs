//! Word-generation client.
//!
//! A thin REST client over the chat-completions API. The prompt pins the
//! model to exactly one word per call; the avoid-list keeps consecutive
//! calls from cycling through the same handful of words.

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use super::config::WordGenConfig;
use super::messages::{ChatErrorResponse, ChatMessage, ChatRequest, ChatResponse};

/// Errors produced by the word-generation client.
#[derive(Debug, Clone, Error)]
pub enum WordGenError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Word generation provider error: {0}")]
    ProviderError(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// DeepSeek-backed practice-word generator.
pub struct WordGenerator {
    config: WordGenConfig,
    http: Client,
}

impl WordGenerator {
    /// Create a generator over a shared HTTP client.
    pub fn new(http: Client, config: WordGenConfig) -> Result<Self, WordGenError> {
        config.validate().map_err(WordGenError::ConfigurationError)?;
        Ok(Self { config, http })
    }

    /// Build the system prompt, enumerating words the model must avoid.
    pub fn build_system_prompt(avoid: &[String]) -> String {
        format!(
            "You are a language learning assistant. Generate a single challenging English word \
             that would be good for pronunciation practice.\n\
             Requirements:\n\
             - Word should be moderately difficult but commonly used\n\
             - Word should be between 2-4 syllables\n\
             - Word should contain interesting phonetic elements\n\
             - Word should NOT be any of these recently used words: {}\n\
             - Respond with just the word, nothing else\n\
             Examples of good words: enthusiasm, particular, necessary, comfortable, significant, \
             opportunity, technology, vocabulary, restaurant, interesting",
            avoid.join(", ")
        )
    }

    /// Generate one practice word, avoiding the given recent words.
    pub async fn generate(&self, avoid: &[String]) -> Result<String, WordGenError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(Self::build_system_prompt(avoid))],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(
            avoid = avoid.len(),
            model = %self.config.model,
            "Requesting practice word"
        );

        let response = self
            .http
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| WordGenError::NetworkError(format!("Request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WordGenError::NetworkError(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ChatErrorResponse>(&body) {
                Ok(err) => format!("Word generation API error: {}", err.error.message),
                Err(_) => format!("Word generation API error ({status}): {body}"),
            };
            return Err(match status.as_u16() {
                401 | 403 => WordGenError::AuthenticationFailed(message),
                _ => WordGenError::ProviderError(message),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| WordGenError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let word = parsed
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| {
                WordGenError::InvalidResponse("Chat completion returned no choices".to_string())
            })?;

        if word.is_empty() {
            return Err(WordGenError::InvalidResponse(
                "Chat completion returned an empty word".to_string(),
            ));
        }

        info!(%word, "Generated practice word");
        Ok(word)
    }
}
