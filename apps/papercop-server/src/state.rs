//! Application state for the PaperCop server
//!
//! Built once at startup. The analyzer is absent when no credential was
//! configured; every analysis request is then rejected before any call.

use std::sync::Arc;

use retraction_analyzer::{Analyzer, AnalyzerConfig, AnthropicClient, ConfigError};
#[cfg(test)]
use retraction_analyzer::GenerativeCapability;
#[cfg(test)]
use verdict_core::encoding::DEFAULT_MAX_DOCUMENT_BYTES;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Option<Arc<Analyzer>>,
    /// Cap on decoded document size
    pub max_upload_bytes: usize,
}

impl AppState {
    /// State backed by the Anthropic Messages API
    pub fn new(
        api_key: Option<&str>,
        base_url: &str,
        config: AnalyzerConfig,
        max_upload_bytes: usize,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let analyzer = match api_key.filter(|key| !key.trim().is_empty()) {
            Some(key) => {
                let client = AnthropicClient::new(key, base_url, config.request_timeout)?;
                Some(Arc::new(Analyzer::new(Arc::new(client), config)))
            }
            None => None,
        };

        Ok(Self {
            analyzer,
            max_upload_bytes,
        })
    }

    /// State backed by an arbitrary capability
    #[cfg(test)]
    pub fn with_capability(
        capability: Arc<dyn GenerativeCapability>,
        config: AnalyzerConfig,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            analyzer: Some(Arc::new(Analyzer::new(capability, config))),
            max_upload_bytes,
        }
    }

    /// State with no credential
    #[cfg(test)]
    pub fn unconfigured() -> Self {
        Self {
            analyzer: None,
            max_upload_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.analyzer.is_some()
    }
}
