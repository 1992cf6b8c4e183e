//! Configuration module for the Parrot Gateway server.
//!
//! Configuration is assembled from `.env` files, environment variables,
//! and an optional YAML file. Priority: YAML > ENV vars > .env values >
//! defaults.
//!
//! # Example
//! ```rust,no_run
//! use parrot_gateway::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variables as the base
//! let config = ServerConfig::from_file(&PathBuf::from("config.yaml"))?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

mod env;
mod yaml;

pub use yaml::YamlConfig;

use std::path::Path;

use crate::core::stt::AzureAssessmentConfig;
use crate::core::tts::ElevenLabsTtsConfig;
use crate::core::wordgen::WordGenConfig;
use crate::session::{DEFAULT_SESSION_CAPACITY, DEFAULT_SESSION_TTL_SECONDS};

/// Server configuration.
///
/// Contains everything needed to run the gateway:
/// - Server settings (host, port)
/// - Vendor credentials (DeepSeek, ElevenLabs, Azure Speech)
/// - Vendor endpoint overrides (used by tests and self-hosted proxies)
/// - Session store bounds
/// - Security settings (CORS, rate limiting)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    /// DeepSeek API key for word generation.
    pub deepseek_api_key: Option<String>,
    /// ElevenLabs API key for reference-audio synthesis.
    pub elevenlabs_api_key: Option<String>,
    /// ElevenLabs voice id; falls back to the provider default.
    pub elevenlabs_voice_id: Option<String>,
    /// Azure Speech subscription key from the Azure Portal
    /// (Speech resource, Keys and Endpoint, Key 1 or Key 2).
    pub azure_speech_subscription_key: Option<String>,
    /// Azure region the Speech resource is deployed in (e.g. "eastus").
    /// The subscription key is tied to this specific region.
    pub azure_speech_region: Option<String>,

    // Vendor endpoint overrides
    pub wordgen_api_url: Option<String>,
    pub elevenlabs_base_url: Option<String>,
    pub azure_speech_endpoint: Option<String>,

    // Session store bounds
    pub session_capacity: u64,
    pub session_ttl_seconds: u64,

    // Security configuration
    /// CORS allowed origins (comma-separated list or "*" for all).
    /// Default: None (CORS disabled, same-origin only).
    pub cors_allowed_origins: Option<String>,
    /// Maximum requests per second per IP address. Default: 60.
    pub rate_limit_requests_per_second: u32,
    /// Maximum burst size for rate limiting. Default: 10.
    pub rate_limit_burst_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            deepseek_api_key: None,
            elevenlabs_api_key: None,
            elevenlabs_voice_id: None,
            azure_speech_subscription_key: None,
            azure_speech_region: None,
            wordgen_api_url: None,
            elevenlabs_base_url: None,
            azure_speech_endpoint: None,
            session_capacity: DEFAULT_SESSION_CAPACITY,
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            cors_allowed_origins: None,
            rate_limit_requests_per_second: 60,
            rate_limit_burst_size: 10,
        }
    }
}

/// Zeroize all secret fields when ServerConfig is dropped so credentials
/// do not linger in memory.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.deepseek_api_key {
            key.zeroize();
        }
        if let Some(ref mut key) = self.elevenlabs_api_key {
            key.zeroize();
        }
        if let Some(ref mut key) = self.azure_speech_subscription_key {
            key.zeroize();
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables (plus `.env` values
    /// already loaded into the environment).
    pub fn from_env() -> Result<Self, String> {
        env::load()
    }

    /// Load configuration from a YAML file, with environment variables as
    /// the base for anything the file leaves unset.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let base = Self::from_env()?;
        let yaml = YamlConfig::from_file(path)?;
        Ok(yaml.merge_into(base))
    }

    /// Socket address string the server binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Word-generation configuration, or a descriptive error when the
    /// credential is absent.
    pub fn wordgen_config(&self) -> Result<WordGenConfig, String> {
        let api_key = self
            .deepseek_api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| "DeepSeek API key not configured".to_string())?;

        let mut config = WordGenConfig {
            api_key,
            ..Default::default()
        };
        if let Some(ref url) = self.wordgen_api_url {
            config.api_url = url.clone();
        }
        Ok(config)
    }

    /// TTS configuration, or a descriptive error when the credential is
    /// absent.
    pub fn tts_config(&self) -> Result<ElevenLabsTtsConfig, String> {
        let api_key = self
            .elevenlabs_api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| "ElevenLabs API key not configured".to_string())?;

        let mut config = ElevenLabsTtsConfig {
            api_key,
            ..Default::default()
        };
        if let Some(ref voice_id) = self.elevenlabs_voice_id {
            config.voice_id = voice_id.clone();
        }
        if let Some(ref url) = self.elevenlabs_base_url {
            config.base_url = url.clone();
        }
        Ok(config)
    }

    /// Speech-assessment configuration, or a descriptive error when the
    /// credentials are absent.
    pub fn assessment_config(&self) -> Result<AzureAssessmentConfig, String> {
        let subscription_key = self
            .azure_speech_subscription_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| "Azure Speech Service credentials not configured".to_string())?;

        let region = match (&self.azure_speech_region, &self.azure_speech_endpoint) {
            (Some(region), _) if !region.is_empty() => region.clone(),
            (_, Some(_)) => String::new(),
            _ => return Err("Azure Speech Service credentials not configured".to_string()),
        };

        Ok(AzureAssessmentConfig {
            subscription_key,
            region,
            endpoint: self.azure_speech_endpoint.clone(),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_address() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "0.0.0.0:3001");
    }

    #[test]
    fn test_missing_credentials_yield_descriptive_errors() {
        let config = ServerConfig::default();

        assert_eq!(
            config.wordgen_config().unwrap_err(),
            "DeepSeek API key not configured"
        );
        assert_eq!(
            config.tts_config().unwrap_err(),
            "ElevenLabs API key not configured"
        );
        assert_eq!(
            config.assessment_config().unwrap_err(),
            "Azure Speech Service credentials not configured"
        );
    }

    #[test]
    fn test_assessment_config_requires_region_or_endpoint() {
        let mut config = ServerConfig::default();
        config.azure_speech_subscription_key = Some("key".to_string());
        assert!(config.assessment_config().is_err());

        config.azure_speech_region = Some("eastus".to_string());
        let assessment = config.assessment_config().unwrap();
        assert_eq!(assessment.region, "eastus");

        config.azure_speech_region = None;
        config.azure_speech_endpoint = Some("http://127.0.0.1:9000".to_string());
        assert!(config.assessment_config().is_ok());
    }

    #[test]
    fn test_overrides_flow_into_vendor_configs() {
        let mut config = ServerConfig::default();
        config.deepseek_api_key = Some("sk".to_string());
        config.elevenlabs_api_key = Some("xi".to_string());
        config.elevenlabs_voice_id = Some("voice-42".to_string());
        config.wordgen_api_url = Some("http://127.0.0.1:9001/chat".to_string());
        config.elevenlabs_base_url = Some("http://127.0.0.1:9002/tts".to_string());

        assert_eq!(
            config.wordgen_config().unwrap().api_url,
            "http://127.0.0.1:9001/chat"
        );
        let tts = config.tts_config().unwrap();
        assert_eq!(tts.voice_id, "voice-42");
        assert_eq!(tts.base_url, "http://127.0.0.1:9002/tts");
    }
}
