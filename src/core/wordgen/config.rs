//! Configuration for the word-generation client.

/// DeepSeek chat-completions endpoint.
pub const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";

/// Default chat model.
pub const DEFAULT_WORDGEN_MODEL: &str = "deepseek-chat";

/// Default sampling temperature. High on purpose: word variety matters
/// more than determinism here.
pub const DEFAULT_TEMPERATURE: f32 = 0.9;

/// Default completion cap. A single word never needs more.
pub const DEFAULT_MAX_TOKENS: u32 = 50;

/// Word-generation configuration.
#[derive(Debug, Clone)]
pub struct WordGenConfig {
    /// DeepSeek API key.
    pub api_key: String,
    /// Endpoint URL. Overridable so tests can point at a mock server.
    pub api_url: String,
    /// Chat model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum completion tokens.
    pub max_tokens: u32,
}

impl Default for WordGenConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: DEEPSEEK_API_URL.to_string(),
            model: DEFAULT_WORDGEN_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl WordGenConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("DeepSeek API key is required for word generation".to_string());
        }
        if self.api_url.is_empty() {
            return Err("Word-generation API URL must not be empty".to_string());
        }
        Ok(())
    }
}
