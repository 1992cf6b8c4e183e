//! ElevenLabs synthesis provider.
//!
//! # API Reference
//!
//! - Endpoint: `POST https://api.elevenlabs.io/v1/text-to-speech/{voice_id}`
//! - Auth: `xi-api-key` header
//! - Output: complete MP3 payload (`Accept: audio/mpeg`)

use bytes::Bytes;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

use super::config::ElevenLabsTtsConfig;

/// Errors produced by the TTS provider.
#[derive(Debug, Clone, Error)]
pub enum TtsError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("TTS provider error: {0}")]
    ProviderError(String),
}

/// ElevenLabs TTS provider.
///
/// # Example
///
/// ```rust,ignore
/// use parrot_gateway::core::tts::{ElevenLabsTts, ElevenLabsTtsConfig};
///
/// let config = ElevenLabsTtsConfig {
///     api_key: "xi-...".to_string(),
///     ..Default::default()
/// };
/// let tts = ElevenLabsTts::new(reqwest::Client::new(), config)?;
/// let audio = tts.synthesize("comfortable").await?;
/// ```
pub struct ElevenLabsTts {
    config: ElevenLabsTtsConfig,
    http: Client,
}

impl ElevenLabsTts {
    /// Create a provider over a shared HTTP client.
    pub fn new(http: Client, config: ElevenLabsTtsConfig) -> Result<Self, TtsError> {
        config.validate().map_err(TtsError::ConfigurationError)?;
        Ok(Self { config, http })
    }

    /// Synthesize `text` and return the complete MP3 payload.
    pub async fn synthesize(&self, text: &str) -> Result<Bytes, TtsError> {
        let body = json!({
            "text": text,
            "model_id": self.config.model_id,
            "voice_settings": {
                "stability": self.config.stability,
                "similarity_boost": self.config.similarity_boost,
            }
        });

        debug!(voice_id = %self.config.voice_id, chars = text.len(), "Synthesizing reference audio");

        let response = self
            .http
            .post(self.config.synthesis_url())
            .header("Accept", "audio/mpeg")
            .header("Content-Type", "application/json")
            .header("xi-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TtsError::NetworkError(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = format!("ElevenLabs API error ({status}): {error_body}");
            return Err(match status.as_u16() {
                401 | 403 => TtsError::AuthenticationFailed(message),
                _ => TtsError::ProviderError(message),
            });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| TtsError::NetworkError(format!("Failed to read audio body: {e}")))?;

        if audio.is_empty() {
            return Err(TtsError::ProviderError(
                "ElevenLabs returned an empty audio payload".to_string(),
            ));
        }

        info!(bytes = audio.len(), "Reference audio synthesized");
        Ok(audio)
    }
}
