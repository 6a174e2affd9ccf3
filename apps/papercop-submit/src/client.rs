//! HTTP client for the analyze endpoint

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument};
use verdict_core::Verdict;

use crate::document::DocumentFile;
use crate::error::SubmitError;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Slightly above the server's own analysis deadline
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(70);

#[derive(Debug, Clone)]
pub struct SubmitterConfig {
    pub server_url: String,
    pub timeout: Duration,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Sends one document per call. No retries.
pub struct Submitter {
    client: Client,
    endpoint: String,
}

impl Submitter {
    pub fn new(config: &SubmitterConfig) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/analyze", config.server_url.trim_end_matches('/')),
        })
    }

    #[instrument(skip(self, document), fields(file = %document.name(), size = document.size()))]
    pub async fn submit(&self, document: &DocumentFile) -> Result<Verdict, SubmitError> {
        info!("Submitting document for analysis");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&document.to_request())
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "Response received");

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| SubmitError::Decode(e.to_string()))
    }
}
