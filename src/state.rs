//! Shared application state.

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::core::stt::AzurePronunciationAssessor;
use crate::core::tts::ElevenLabsTts;
use crate::core::wordgen::WordGenerator;
use crate::errors::{AppError, AppResult};
use crate::session::SessionStore;

/// User-Agent header value for outbound vendor requests.
const USER_AGENT: &str = concat!("Parrot-Gateway/", env!("CARGO_PKG_VERSION"));

/// State threaded through every handler.
///
/// Holds the configuration, one pooled HTTP client shared by all vendor
/// calls, and the session store. Vendor clients are assembled per request
/// from the shared pieces; construction is cheap and keeps credential
/// checks on the request path, where their absence must surface as a 500
/// with a descriptive message.
pub struct AppState {
    pub config: ServerConfig,
    pub http: Client,
    pub sessions: SessionStore,
}

impl AppState {
    /// Create the application state from a loaded configuration.
    pub async fn new(config: ServerConfig) -> Arc<Self> {
        let http = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        let sessions = SessionStore::new(
            config.session_capacity,
            Duration::from_secs(config.session_ttl_seconds),
        );

        Arc::new(Self {
            config,
            http,
            sessions,
        })
    }

    /// Word-generation client for this request.
    pub fn word_generator(&self) -> AppResult<WordGenerator> {
        let config = self
            .config
            .wordgen_config()
            .map_err(AppError::MissingConfiguration)?;
        WordGenerator::new(self.http.clone(), config).map_err(AppError::from)
    }

    /// TTS provider for this request.
    pub fn tts_provider(&self) -> AppResult<ElevenLabsTts> {
        let config = self
            .config
            .tts_config()
            .map_err(AppError::MissingConfiguration)?;
        ElevenLabsTts::new(self.http.clone(), config).map_err(AppError::from)
    }

    /// Pronunciation assessor for this request.
    pub fn pronunciation_assessor(&self) -> AppResult<AzurePronunciationAssessor> {
        let config = self
            .config
            .assessment_config()
            .map_err(AppError::MissingConfiguration)?;
        AzurePronunciationAssessor::new(self.http.clone(), config).map_err(AppError::from)
    }
}
