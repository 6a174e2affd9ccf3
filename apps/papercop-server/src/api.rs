//! API handlers for the PaperCop server
//!
//! Provides REST endpoints for:
//! - Retraction analysis of an uploaded paper
//! - Health checks

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use verdict_core::encoding::{decode_document, strip_data_uri_prefix};
use verdict_core::{AnalysisRequest, Verdict};

use crate::error::ApiError;
use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub capability_configured: bool,
}

/// Handler: GET /health
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "papercop-server",
        version: env!("CARGO_PKG_VERSION"),
        capability_configured: state.is_configured(),
    })
}

/// Analyze request body. Both fields are required; they are optional here so
/// a missing field is reported as a 400 with an `error` body.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeApiRequest {
    pub file_name: Option<String>,
    /// Base64 PDF, optionally with a data-URI prefix
    pub file_content: Option<String>,
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

/// Handler: POST /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeApiRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ApiError> {
    let analyzer = state.analyzer.as_ref().ok_or(ApiError::NotConfigured)?;

    let Json(req) = payload.map_err(|rejection| {
        ApiError::InvalidInput(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let (file_name, file_content) = match (required(req.file_name), required(req.file_content)) {
        (Some(name), Some(content)) => (name, content),
        _ => {
            return Err(ApiError::InvalidInput(
                "File name and content are required".to_string(),
            ))
        }
    };

    let document_base64 = strip_data_uri_prefix(&file_content).trim().to_string();
    let document = decode_document(&document_base64)
        .map_err(|e| ApiError::InvalidInput(format!("File content is not valid base64: {}", e)))?;

    if document.len() > state.max_upload_bytes {
        return Err(ApiError::InvalidInput(format!(
            "File exceeds the maximum size of {} bytes",
            state.max_upload_bytes
        )));
    }

    info!(
        "Analyze request: file={}, size={} bytes",
        file_name,
        document.len()
    );
    debug!("Encoded length: {}", document_base64.len());

    let request = AnalysisRequest {
        document_name: file_name,
        document_base64,
    };

    let verdict = analyzer.analyze(&request).await?;
    Ok(Json(verdict))
}
