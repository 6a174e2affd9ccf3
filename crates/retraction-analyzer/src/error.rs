//! Error types for the analysis pipeline

use thiserror::Error;
use verdict_core::ExtractionError;

/// Failures reported by a generative capability
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("Capability call timed out after {0}ms")]
    Timeout(u64),

    #[error("Capability returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid capability response: {0}")]
    InvalidResponse(String),
}

/// Failures of one analysis run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No text content found in model response")]
    NoTextContent,

    #[error("Analysis timed out after {0}ms")]
    Timeout(u64),

    #[error("{0}")]
    Capability(String),
}

impl From<CapabilityError> for AnalysisError {
    fn from(err: CapabilityError) -> Self {
        match err {
            CapabilityError::Timeout(ms) => AnalysisError::Timeout(ms),
            other => AnalysisError::Capability(other.to_string()),
        }
    }
}

impl From<ExtractionError> for AnalysisError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::NoTextContent => AnalysisError::NoTextContent,
        }
    }
}

/// Invalid analyzer settings, detected at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max output tokens must be greater than zero")]
    ZeroOutputTokens,

    #[error("thinking budget ({budget}) must be at least 1024 and below max output tokens ({max_tokens})")]
    InvalidThinkingBudget { budget: u32, max_tokens: u32 },

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_timeout_stays_distinct() {
        let err: AnalysisError = CapabilityError::Timeout(50_000).into();
        assert_eq!(err, AnalysisError::Timeout(50_000));
    }

    #[test]
    fn test_capability_failure_keeps_message() {
        let err: AnalysisError = CapabilityError::Api {
            status: 529,
            message: "Overloaded".to_string(),
        }
        .into();
        assert_eq!(
            err,
            AnalysisError::Capability("Capability returned 529: Overloaded".to_string())
        );
    }
}
