//! HTTP error responses.

use crate::error::TubescribeError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors returned to API callers. Messages are fixed; details only go to the log.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No YouTube URL provided")]
    MissingUrl,

    #[error("Invalid YouTube URL")]
    InvalidUrl,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal server error")]
    Internal(#[source] TubescribeError),

    #[error("Failed to fetch or process transcript.")]
    Transcript(#[source] TubescribeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingUrl | ApiError::InvalidUrl => {
                tracing::debug!(error = %self, "Rejected request");
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(source) | ApiError::Transcript(source) => {
                tracing::error!(error = %source, "Error processing transcript");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = axum::Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
