//! Handler for practice-word generation.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::errors::AppResult;
use crate::state::AppState;

use super::session_id;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateWordResponse {
    pub word: String,
}

/// Handler for POST /generate-word.
///
/// Asks the language model for one practice word, passing the session's
/// recent words as an avoid-list, then records the new word in the ring.
pub async fn generate_word(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> AppResult<Json<GenerateWordResponse>> {
    let session = state.sessions.session(session_id(&headers)).await;
    let avoid = session.recent_words();

    debug!(recent = avoid.len(), "Generating practice word");

    let generator = state.word_generator()?;
    let word = generator.generate(&avoid).await?;

    session.record_word(&word);

    Ok(Json(GenerateWordResponse { word }))
}
