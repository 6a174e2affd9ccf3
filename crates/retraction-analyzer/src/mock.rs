//! Scripted capability for tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use verdict_core::{ContentSegment, ModelReply};

use crate::capability::{CapabilityRequest, GenerativeCapability};
use crate::error::CapabilityError;

/// Returns the same outcome on every call and records what it was asked
pub struct MockCapability {
    outcome: Result<ModelReply, CapabilityError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<CapabilityRequest>>,
}

impl MockCapability {
    /// Reply with a single text segment
    pub fn replying(text: &str) -> Self {
        Self::with_reply(ModelReply::new(vec![ContentSegment::Text {
            text: text.to_string(),
        }]))
    }

    pub fn with_reply(reply: ModelReply) -> Self {
        Self::with_outcome(Ok(reply))
    }

    pub fn failing(err: CapabilityError) -> Self {
        Self::with_outcome(Err(err))
    }

    fn with_outcome(outcome: Result<ModelReply, CapabilityError>) -> Self {
        Self {
            outcome,
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Sleep before answering
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CapabilityRequest> {
        self.last_request
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }
}

#[async_trait]
impl GenerativeCapability for MockCapability {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &CapabilityRequest) -> Result<ModelReply, CapabilityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}
