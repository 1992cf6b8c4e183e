//! HTTP request handlers.

pub mod audio;
pub mod pronunciation;
pub mod words;

use axum::Json;
use axum::http::HeaderMap;
use serde_json::{Value, json};

use crate::session::DEFAULT_SESSION_ID;

/// Header carrying the caller's session key. Clients that never send it
/// share one default session, which matches single-user use.
pub const SESSION_HEADER: &str = "x-session-id";

/// Resolve the session key for a request.
pub(crate) fn session_id(headers: &HeaderMap) -> &str {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_SESSION_ID)
}

/// Handler for GET / - health check.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "service": "parrot-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
