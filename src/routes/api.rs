use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{audio, pronunciation, words};
use crate::state::AppState;
use std::sync::Arc;

/// Create the API router with the practice routes.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-word", post(words::generate_word))
        .route("/generate-audio", post(audio::generate_audio))
        .route("/play-reference", get(audio::play_reference))
        .route("/check-pronunciation", post(pronunciation::check_pronunciation))
        .layer(TraceLayer::new_for_http())
}
