//! Handler for pronunciation scoring.
//!
//! Accepts the learner's recording as a multipart form, forwards it to
//! the assessment service, and assembles the response the UI consumes:
//! overall scores, feedback tier, the server-computed syllable breakdown,
//! and the raw phoneme scores.

use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use axum::response::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::practice::{
    Feedback, PhonemeScore, SyllableBreakdown, SyllableSplitter, syllable_breakdown,
};
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

use super::session_id;

/// Scoring response. Field names mirror what practice clients expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPronunciationResponse {
    /// Overall pronunciation score, rounded to a whole number.
    pub score: u32,
    pub accuracy_score: u32,
    pub completeness_score: u32,
    pub fluency_score: u32,
    /// Display form of what the learner said, e.g. "Banana.".
    pub recognized_text: String,
    pub feedback: Feedback,
    pub syllable_breakdown: SyllableBreakdown,
    pub phoneme_scores: Vec<PhonemeScore>,
}

/// The two fields of the check-pronunciation form.
struct ScoringForm {
    audio: Bytes,
    word: String,
}

/// Pull the `audio` blob and `word` field out of the multipart form.
/// Unknown fields (clients send extras like timestamps) are ignored.
async fn read_form(mut multipart: Multipart) -> AppResult<ScoringForm> {
    let mut audio: Option<Bytes> = None;
    let mut word: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MissingInput(format!("Malformed multipart form: {e}")))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("audio") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::MissingInput(format!("Failed to read audio: {e}")))?;
                audio = Some(data);
            }
            Some("word") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::MissingInput(format!("Failed to read word: {e}")))?;
                word = Some(value);
            }
            other => {
                debug!(field = ?other, "Ignoring unexpected form field");
            }
        }
    }

    match (audio, word) {
        (Some(audio), Some(word)) if !audio.is_empty() && !word.trim().is_empty() => {
            Ok(ScoringForm { audio, word })
        }
        _ => Err(AppError::MissingInput(
            "Missing audio or target word".to_string(),
        )),
    }
}

/// Sanity-check the uploaded container before spending a vendor call on
/// it. Returns the spec for logging.
fn validate_wav(audio: &[u8]) -> AppResult<hound::WavSpec> {
    let reader = hound::WavReader::new(Cursor::new(audio)).map_err(|e| {
        AppError::MissingInput(format!("Uploaded audio is not a valid WAV recording: {e}"))
    })?;
    Ok(reader.spec())
}

/// Handler for POST /check-pronunciation.
pub async fn check_pronunciation(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> AppResult<Json<CheckPronunciationResponse>> {
    let form = read_form(multipart).await?;

    let spec = validate_wav(&form.audio)?;
    debug!(
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        bytes = form.audio.len(),
        word = %form.word,
        "Scoring recording"
    );
    if spec.sample_rate != 16_000 {
        warn!(
            sample_rate = spec.sample_rate,
            "Recording is not 16 kHz; assessment accuracy may suffer"
        );
    }

    // Touch the session so scoring keeps it alive alongside generation.
    let _session = state.sessions.session(session_id(&headers)).await;

    let assessor = state.pronunciation_assessor()?;
    let result = assessor.assess(form.audio, &form.word).await?;

    let splitter = SyllableSplitter::DiphthongAware;
    let target_syllables = splitter.split(&form.word);
    let recognized_syllables = if result.lexical_text.is_empty() {
        Vec::new()
    } else {
        splitter.split(&result.lexical_text)
    };

    let breakdown = syllable_breakdown(target_syllables, recognized_syllables, &result.phonemes);

    let score = result.pron_score.round();
    let feedback = Feedback::for_score(score);

    Ok(Json(CheckPronunciationResponse {
        score: score as u32,
        accuracy_score: result.accuracy_score.round() as u32,
        completeness_score: result.completeness_score.round() as u32,
        fluency_score: result.fluency_score.round() as u32,
        recognized_text: result.display_text,
        feedback,
        syllable_breakdown: breakdown,
        phoneme_scores: result.phonemes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav_bytes(sample_rate: u32) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut buffer = Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut buffer, spec).unwrap();
        for _ in 0..sample_rate / 100 {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_validate_wav_accepts_pcm() {
        let spec = validate_wav(&wav_bytes(16_000)).unwrap();
        assert_eq!(spec.sample_rate, 16_000);
        assert_eq!(spec.channels, 1);
    }

    #[test]
    fn test_validate_wav_rejects_garbage() {
        let result = validate_wav(b"definitely not a wav file");
        assert!(matches!(
            result,
            Err(AppError::MissingInput(msg)) if msg.contains("not a valid WAV")
        ));
    }
}
