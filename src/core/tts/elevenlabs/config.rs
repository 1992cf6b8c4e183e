//! Configuration for the ElevenLabs TTS provider.

/// ElevenLabs text-to-speech endpoint base. The voice id is appended as a
/// path segment.
pub const ELEVENLABS_TTS_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";

/// Default voice ("Rachel").
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

/// Default model.
pub const DEFAULT_MODEL_ID: &str = "eleven_monolingual_v1";

/// ElevenLabs TTS configuration.
#[derive(Debug, Clone)]
pub struct ElevenLabsTtsConfig {
    /// ElevenLabs API key (`xi-api-key` header).
    pub api_key: String,
    /// Endpoint base URL. Overridable so tests can point at a mock server.
    pub base_url: String,
    /// Voice identifier appended to the endpoint path.
    pub voice_id: String,
    /// Synthesis model.
    pub model_id: String,
    /// Voice stability, 0.0 to 1.0.
    pub stability: f32,
    /// Similarity boost, 0.0 to 1.0.
    pub similarity_boost: f32,
}

impl Default for ElevenLabsTtsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: ELEVENLABS_TTS_URL.to_string(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

impl ElevenLabsTtsConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("ElevenLabs API key is required for audio synthesis".to_string());
        }
        if self.voice_id.is_empty() {
            return Err("ElevenLabs voice id must not be empty".to_string());
        }
        Ok(())
    }

    /// Full synthesis URL for the configured voice.
    pub fn synthesis_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.voice_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ElevenLabsTtsConfig::default();
        assert_eq!(config.voice_id, DEFAULT_VOICE_ID);
        assert_eq!(config.model_id, "eleven_monolingual_v1");
        assert!((config.stability - 0.5).abs() < f32::EPSILON);
        assert!((config.similarity_boost - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_synthesis_url() {
        let config = ElevenLabsTtsConfig {
            base_url: "http://127.0.0.1:9000/v1/text-to-speech/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.synthesis_url(),
            format!("http://127.0.0.1:9000/v1/text-to-speech/{DEFAULT_VOICE_ID}")
        );
    }

    #[test]
    fn test_validate_requires_api_key() {
        assert!(ElevenLabsTtsConfig::default().validate().is_err());
    }
}
