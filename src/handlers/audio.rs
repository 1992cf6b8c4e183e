//! Handlers for reference-audio synthesis and playback.

use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::session::ReferenceAudio;
use crate::state::AppState;

use super::session_id;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateAudioRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateAudioResponse {
    pub success: bool,
}

/// Handler for POST /generate-audio.
///
/// Synthesizes reference audio for the given text and stores it in the
/// session's single audio slot, overwriting whatever was there.
pub async fn generate_audio(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<GenerateAudioRequest>,
) -> AppResult<Json<GenerateAudioResponse>> {
    if request.text.trim().is_empty() {
        return Err(AppError::MissingInput(
            "Missing text to synthesize".to_string(),
        ));
    }

    let tts = state.tts_provider()?;
    let audio = tts.synthesize(&request.text).await?;

    let session = state.sessions.session(session_id(&headers)).await;
    session.store_reference_audio(ReferenceAudio {
        data: audio,
        content_type: "audio/mpeg",
        text: request.text,
    });

    Ok(Json(GenerateAudioResponse { success: true }))
}

/// Handler for GET /play-reference.
///
/// Streams the session's reference audio back to the caller, or 404 when
/// nothing has been synthesized yet.
pub async fn play_reference(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let session = state.sessions.session(session_id(&headers)).await;

    let audio = session
        .reference_audio()
        .ok_or_else(|| AppError::NotFound("No audio available".to_string()))?;

    debug!(bytes = audio.data.len(), text = %audio.text, "Serving reference audio");

    let response_headers = [
        (header::CONTENT_TYPE, audio.content_type.to_string()),
        (header::CONTENT_LENGTH, audio.data.len().to_string()),
    ];

    Ok((response_headers, audio.data).into_response())
}
