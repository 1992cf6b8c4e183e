//! YAML configuration file loading.

use serde::Deserialize;
use std::path::Path;

use super::ServerConfig;

/// YAML configuration structure.
///
/// All fields are optional to allow partial configuration; values set
/// here override environment variables.
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 3001
///
/// providers:
///   deepseek_api_key: "your-deepseek-key"
///   elevenlabs_api_key: "your-elevenlabs-key"
///   elevenlabs_voice_id: "21m00Tcm4TlvDq8ikWAM"
///   azure_speech_subscription_key: "your-azure-key"
///   azure_speech_region: "eastus"
///
/// sessions:
///   capacity: 256
///   ttl_seconds: 1800
///
/// security:
///   cors_allowed_origins: "*"
///   rate_limit_requests_per_second: 60
///   rate_limit_burst_size: 10
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: Option<ServerYaml>,
    pub providers: Option<ProvidersYaml>,
    pub sessions: Option<SessionsYaml>,
    pub security: Option<SecurityYaml>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYaml {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ProvidersYaml {
    pub deepseek_api_key: Option<String>,
    pub deepseek_api_url: Option<String>,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_voice_id: Option<String>,
    pub elevenlabs_base_url: Option<String>,
    /// Azure Speech subscription key from the Azure Portal
    /// (Speech resource, Keys and Endpoint, Key 1 or Key 2).
    pub azure_speech_subscription_key: Option<String>,
    /// Azure region the Speech resource is deployed in (e.g. "eastus").
    pub azure_speech_region: Option<String>,
    pub azure_speech_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SessionsYaml {
    pub capacity: Option<u64>,
    pub ttl_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SecurityYaml {
    pub cors_allowed_origins: Option<String>,
    pub rate_limit_requests_per_second: Option<u32>,
    pub rate_limit_burst_size: Option<u32>,
}

impl YamlConfig {
    /// Parse a YAML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {e}", path.display()))
    }

    /// Overlay this YAML configuration on top of `base`; YAML values win
    /// where present.
    pub fn merge_into(self, base: ServerConfig) -> ServerConfig {
        let mut config = base;

        if let Some(server) = self.server {
            if let Some(host) = server.host {
                config.host = host;
            }
            if let Some(port) = server.port {
                config.port = port;
            }
        }

        if let Some(providers) = self.providers {
            if providers.deepseek_api_key.is_some() {
                config.deepseek_api_key = providers.deepseek_api_key;
            }
            if providers.deepseek_api_url.is_some() {
                config.wordgen_api_url = providers.deepseek_api_url;
            }
            if providers.elevenlabs_api_key.is_some() {
                config.elevenlabs_api_key = providers.elevenlabs_api_key;
            }
            if providers.elevenlabs_voice_id.is_some() {
                config.elevenlabs_voice_id = providers.elevenlabs_voice_id;
            }
            if providers.elevenlabs_base_url.is_some() {
                config.elevenlabs_base_url = providers.elevenlabs_base_url;
            }
            if providers.azure_speech_subscription_key.is_some() {
                config.azure_speech_subscription_key = providers.azure_speech_subscription_key;
            }
            if providers.azure_speech_region.is_some() {
                config.azure_speech_region = providers.azure_speech_region;
            }
            if providers.azure_speech_endpoint.is_some() {
                config.azure_speech_endpoint = providers.azure_speech_endpoint;
            }
        }

        if let Some(sessions) = self.sessions {
            if let Some(capacity) = sessions.capacity {
                config.session_capacity = capacity;
            }
            if let Some(ttl) = sessions.ttl_seconds {
                config.session_ttl_seconds = ttl;
            }
        }

        if let Some(security) = self.security {
            if security.cors_allowed_origins.is_some() {
                config.cors_allowed_origins = security.cors_allowed_origins;
            }
            if let Some(rps) = security.rate_limit_requests_per_second {
                config.rate_limit_requests_per_second = rps;
            }
            if let Some(burst) = security.rate_limit_burst_size {
                config.rate_limit_burst_size = burst;
            }
        }

        config
    }
}
