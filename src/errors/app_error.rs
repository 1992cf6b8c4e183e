//! Application-level error taxonomy and its HTTP mapping.
//!
//! Every failure surfaces directly to the caller as a JSON body of the
//! form `{"error": "..."}`; there are no retries anywhere. The taxonomy:
//!
//! - missing input (absent form fields, malformed uploads) -> 400
//! - missing configuration (absent vendor credentials) -> 500, descriptive
//! - vendor-call failures (network, auth, recognition) -> 500 with the
//!   upstream message embedded
//! - anything unexpected -> 500, generic message
//! - empty reference-audio slot -> 404

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::core::stt::AssessmentError;
use crate::core::tts::TtsError;
use crate::core::wordgen::WordGenError;

pub type AppResult<T> = Result<T, AppError>;

/// Application error taxonomy.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request is missing or malformed input.
    #[error("{0}")]
    MissingInput(String),

    /// A vendor credential required by this route is not configured.
    #[error("{0}")]
    MissingConfiguration(String),

    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// An outbound vendor call failed; the upstream message is embedded.
    #[error("{0}")]
    Vendor(String),

    /// Unexpected internal failure. The detail is logged, not returned.
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingConfiguration(_) | Self::Vendor(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            match &self {
                AppError::Internal(source) => error!(error = %source, "Internal server error"),
                other => error!(error = %other, "Request failed"),
            }
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<WordGenError> for AppError {
    fn from(err: WordGenError) -> Self {
        match err {
            WordGenError::ConfigurationError(msg) => Self::MissingConfiguration(msg),
            other => Self::Vendor(format!("Failed to generate word: {other}")),
        }
    }
}

impl From<TtsError> for AppError {
    fn from(err: TtsError) -> Self {
        match err {
            TtsError::ConfigurationError(msg) => Self::MissingConfiguration(msg),
            other => Self::Vendor(format!("Failed to generate audio: {other}")),
        }
    }
}

impl From<AssessmentError> for AppError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::ConfigurationError(msg) => Self::MissingConfiguration(msg),
            other => Self::Vendor(format!("Failed to assess pronunciation: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::MissingInput("missing audio".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("no audio".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MissingConfiguration("no key".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Vendor("upstream".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let err = AppError::Internal(anyhow::anyhow!("secret detail"));
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_vendor_error_embeds_upstream_message() {
        let err = AppError::from(TtsError::ProviderError("quota exceeded".into()));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_configuration_errors_map_to_missing_configuration() {
        let err = AppError::from(WordGenError::ConfigurationError(
            "DeepSeek API key is required for word generation".into(),
        ));
        assert!(matches!(err, AppError::MissingConfiguration(_)));
    }
}
