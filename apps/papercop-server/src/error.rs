//! Error types for the PaperCop server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use retraction_analyzer::AnalysisError;
use serde::Serialize;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Anthropic API key is not configured")]
    NotConfigured,

    #[error("{0}")]
    InvalidInput(String),

    #[error("No text content found in model response")]
    NoTextContent,

    #[error("Analysis timed out after {0}ms")]
    Timeout(u64),

    #[error("{0}")]
    Unknown(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotConfigured => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NoTextContent => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ApiError::Timeout(ms) => (
                StatusCode::GATEWAY_TIMEOUT,
                format!(
                    "Analysis timed out after {} seconds. The paper may be too long; please try again or upload a shorter document.",
                    *ms as f64 / 1000.0
                ),
            ),
            ApiError::Unknown(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        if status.is_server_error() {
            tracing::error!("Error analyzing PDF: {}", self);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::NoTextContent => ApiError::NoTextContent,
            AnalysisError::Timeout(ms) => ApiError::Timeout(ms),
            AnalysisError::Capability(msg) => ApiError::Unknown(msg),
        }
    }
}
