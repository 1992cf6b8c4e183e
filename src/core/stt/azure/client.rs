//! Azure pronunciation-assessment client.

use base64::Engine;
use bytes::Bytes;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

use super::config::AzureAssessmentConfig;
use super::messages::RecognitionResponse;
use crate::core::practice::PhonemeScore;

/// Content type for the uploaded recording. The browser records 16 kHz
/// mono PCM WAV, which is what the short-audio endpoint expects.
const AUDIO_CONTENT_TYPE: &str = "audio/wav; codecs=audio/pcm; samplerate=16000";

/// Errors produced by the assessment client.
#[derive(Debug, Clone, Error)]
pub enum AssessmentError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Speech assessment provider error: {0}")]
    ProviderError(String),

    #[error("Recognition failed: {0}")]
    RecognitionFailed(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Flattened assessment outcome for one recording.
#[derive(Debug, Clone, PartialEq)]
pub struct PronunciationResult {
    /// Overall pronunciation score (0-100).
    pub pron_score: f64,
    /// Accuracy score (0-100).
    pub accuracy_score: f64,
    /// Completeness score (0-100).
    pub completeness_score: f64,
    /// Fluency score (0-100).
    pub fluency_score: f64,
    /// Display form of the recognized text, e.g. "Banana.".
    pub display_text: String,
    /// Lexical form of the recognized text, e.g. "banana". Punctuation-free,
    /// which is what syllable comparison wants.
    pub lexical_text: String,
    /// Phoneme scores of the assessed word, in order.
    pub phonemes: Vec<PhonemeScore>,
}

/// Client for Azure's short-audio recognition endpoint with pronunciation
/// assessment enabled.
pub struct AzurePronunciationAssessor {
    config: AzureAssessmentConfig,
    http: Client,
}

impl AzurePronunciationAssessor {
    /// Create an assessor over a shared HTTP client.
    pub fn new(http: Client, config: AzureAssessmentConfig) -> Result<Self, AssessmentError> {
        config
            .validate()
            .map_err(AssessmentError::ConfigurationError)?;
        Ok(Self { config, http })
    }

    /// Build the base64 `Pronunciation-Assessment` header value for a
    /// reference text: 100-point grading, phoneme granularity, miscue
    /// detection on.
    pub fn assessment_header(reference_text: &str) -> String {
        let params = json!({
            "ReferenceText": reference_text,
            "GradingSystem": "HundredMark",
            "Granularity": "Phoneme",
            "EnableMiscue": true,
        });
        base64::engine::general_purpose::STANDARD.encode(params.to_string())
    }

    /// Assess a WAV recording against the target word.
    pub async fn assess(
        &self,
        audio: Bytes,
        target_word: &str,
    ) -> Result<PronunciationResult, AssessmentError> {
        debug!(
            bytes = audio.len(),
            word = %target_word,
            "Submitting recording for pronunciation assessment"
        );

        let response = self
            .http
            .post(self.config.recognition_url())
            .header("Ocp-Apim-Subscription-Key", &self.config.subscription_key)
            .header("Content-Type", AUDIO_CONTENT_TYPE)
            .header("Accept", "application/json")
            .header(
                "Pronunciation-Assessment",
                Self::assessment_header(target_word),
            )
            .body(audio)
            .send()
            .await
            .map_err(|e| AssessmentError::NetworkError(format!("Request failed: {e}")))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AssessmentError::NetworkError(format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            let message = format!("Azure Speech API error ({status}): {body}");
            return Err(match status.as_u16() {
                401 | 403 => AssessmentError::AuthenticationFailed(message),
                _ => AssessmentError::ProviderError(message),
            });
        }

        let parsed: RecognitionResponse = serde_json::from_str(&body).map_err(|e| {
            AssessmentError::InvalidResponse(format!("Failed to parse response: {e}"))
        })?;

        if parsed.recognition_status != "Success" {
            return Err(AssessmentError::RecognitionFailed(format!(
                "Recognition status: {}",
                parsed.recognition_status
            )));
        }

        let best = parsed
            .n_best
            .as_ref()
            .and_then(|hypotheses| hypotheses.first())
            .ok_or_else(|| {
                AssessmentError::InvalidResponse(
                    "Detailed response contained no hypotheses".to_string(),
                )
            })?;

        let scores = best.pronunciation_assessment.clone().unwrap_or_default();

        // The assessed unit is a single word; flatten its phoneme tree.
        let phonemes = best
            .words
            .as_deref()
            .and_then(|words| words.first())
            .and_then(|word| word.phonemes.as_ref())
            .map(|phonemes| {
                phonemes
                    .iter()
                    .map(|p| PhonemeScore {
                        phoneme: p.phoneme.clone(),
                        accuracy_score: p
                            .pronunciation_assessment
                            .as_ref()
                            .map(|scores| scores.accuracy_score)
                            .unwrap_or(0.0),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let result = PronunciationResult {
            pron_score: scores.pron_score,
            accuracy_score: scores.accuracy_score,
            completeness_score: scores.completeness_score,
            fluency_score: scores.fluency_score,
            display_text: parsed
                .display_text
                .or_else(|| best.display.clone())
                .unwrap_or_else(|| best.lexical.clone()),
            lexical_text: best.lexical.clone(),
            phonemes,
        };

        info!(
            score = result.pron_score,
            recognized = %result.lexical_text,
            "Pronunciation assessed"
        );
        Ok(result)
    }
}
