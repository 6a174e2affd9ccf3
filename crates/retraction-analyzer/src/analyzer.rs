//! Single-shot analysis: one capability call, one verdict

use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;
use verdict_core::extract::extract_percentage_with_source;
use verdict_core::{extract_from_reply, AnalysisRequest, Verdict};

use crate::capability::GenerativeCapability;
use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::prompt;

/// Lifecycle of one analysis. Linear, no retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

impl fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnalysisPhase::Idle => "idle",
            AnalysisPhase::Requesting => "requesting",
            AnalysisPhase::Succeeded => "succeeded",
            AnalysisPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

pub struct Analyzer {
    capability: Arc<dyn GenerativeCapability>,
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(capability: Arc<dyn GenerativeCapability>, config: AnalyzerConfig) -> Self {
        Self { capability, config }
    }

    /// Analyze one document within the overall deadline
    #[instrument(
        skip(self, request),
        fields(analysis_id = %Uuid::new_v4(), file_name = %request.document_name)
    )]
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<Verdict, AnalysisError> {
        let deadline = self.config.overall_deadline;
        match tokio::time::timeout(deadline, self.run(request)).await {
            Ok(result) => result,
            Err(_elapsed) => {
                let ms = deadline.as_millis() as u64;
                warn!(phase = %AnalysisPhase::Failed, deadline_ms = ms, "Analysis deadline exceeded");
                Err(AnalysisError::Timeout(ms))
            }
        }
    }

    async fn run(&self, request: &AnalysisRequest) -> Result<Verdict, AnalysisError> {
        debug!(phase = %AnalysisPhase::Idle, "Building capability request");
        let capability_request = prompt::build_request(&self.config, &request.document_base64);

        info!(
            phase = %AnalysisPhase::Requesting,
            capability = self.capability.name(),
            model = %capability_request.model,
            extended_reasoning = capability_request.reasoning_budget.is_some(),
            "Sending document for review"
        );

        let reply = match self.capability.generate(&capability_request).await {
            Ok(reply) => reply,
            Err(err) => {
                error!(phase = %AnalysisPhase::Failed, error = %err, "Capability call failed");
                return Err(err.into());
            }
        };

        let verdict = extract_from_reply(&reply, &request.document_name).map_err(|err| {
            error!(phase = %AnalysisPhase::Failed, error = %err, "Reply had no text segment");
            AnalysisError::from(err)
        })?;

        let source = reply
            .first_text()
            .and_then(extract_percentage_with_source)
            .map(|m| m.source)
            .unwrap_or("default");

        info!(
            phase = %AnalysisPhase::Succeeded,
            retracted_percentage = verdict.retracted_percentage,
            percentage_source = source,
            reply_chars = verdict.chain_of_thought.len(),
            "Verdict extracted"
        );

        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CapabilityError;
    use crate::mock::MockCapability;
    use std::time::Duration;
    use verdict_core::{ContentSegment, ModelReply};

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            document_name: "paper.pdf".to_string(),
            document_base64: "JVBERi0xLjc=".to_string(),
        }
    }

    fn analyzer(mock: Arc<MockCapability>, config: AnalyzerConfig) -> Analyzer {
        Analyzer::new(mock, config)
    }

    #[tokio::test]
    async fn test_analyze_returns_verdict() {
        let reply = "Severe issues.\n\nConclusion: The data cannot support the claims made.\n\n[[85%]]";
        let mock = Arc::new(MockCapability::replying(reply));
        let verdict = analyzer(mock.clone(), AnalyzerConfig::default())
            .analyze(&request())
            .await
            .unwrap();

        assert_eq!(verdict.retracted_percentage, 85.0);
        assert_eq!(verdict.analysis, "The data cannot support the claims made.");
        assert_eq!(verdict.chain_of_thought, reply);
        assert_eq!(verdict.file_name, "paper.pdf");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_analyze_forwards_document_and_settings() {
        let mock = Arc::new(MockCapability::replying("[[1%]]"));
        let config = AnalyzerConfig {
            max_output_tokens: 8000,
            thinking_budget_tokens: 2048,
            ..Default::default()
        };
        analyzer(mock.clone(), config).analyze(&request()).await.unwrap();

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.document_base64, "JVBERi0xLjc=");
        assert_eq!(sent.max_output_tokens, 8000);
        assert_eq!(sent.reasoning_budget, Some(2048));
        assert!(sent.instruction.contains("[[42%]]"));
    }

    #[tokio::test]
    async fn test_analyze_without_text_fails() {
        let mock = Arc::new(MockCapability::with_reply(ModelReply::new(vec![
            ContentSegment::RedactedThinking,
        ])));
        let err = analyzer(mock, AnalyzerConfig::default())
            .analyze(&request())
            .await
            .unwrap_err();
        assert_eq!(err, AnalysisError::NoTextContent);
    }

    #[tokio::test]
    async fn test_capability_timeout_is_distinct() {
        let mock = Arc::new(MockCapability::failing(CapabilityError::Timeout(50_000)));
        let err = analyzer(mock, AnalyzerConfig::default())
            .analyze(&request())
            .await
            .unwrap_err();
        assert_eq!(err, AnalysisError::Timeout(50_000));
    }

    #[tokio::test]
    async fn test_overall_deadline_enforced() {
        let mock = Arc::new(MockCapability::replying("[[10%]]").delayed(Duration::from_secs(5)));
        let config = AnalyzerConfig {
            overall_deadline: Duration::from_millis(50),
            ..Default::default()
        };
        let err = analyzer(mock, config).analyze(&request()).await.unwrap_err();
        assert_eq!(err, AnalysisError::Timeout(50));
    }

    #[tokio::test]
    async fn test_capability_failure_keeps_message() {
        let mock = Arc::new(MockCapability::failing(CapabilityError::Transport(
            "connection refused".to_string(),
        )));
        let err = analyzer(mock, AnalyzerConfig::default())
            .analyze(&request())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Capability("Transport error: connection refused".to_string())
        );
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(AnalysisPhase::Requesting.to_string(), "requesting");
        assert_eq!(AnalysisPhase::Failed.to_string(), "failed");
    }
}
