//! Port to a generative text capability
//!
//! The capability is a black box: given a document and an instruction it
//! returns typed content segments. Implementations map this request onto
//! their own wire format.

use async_trait::async_trait;
use verdict_core::ModelReply;

use crate::error::CapabilityError;

/// Provider-neutral description of one generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityRequest {
    pub model: String,
    pub system: String,
    pub instruction: String,
    /// Base64 document body
    pub document_base64: String,
    pub media_type: String,
    pub max_output_tokens: u32,
    /// Visible reasoning budget, `None` disables extended reasoning
    pub reasoning_budget: Option<u32>,
}

#[async_trait]
pub trait GenerativeCapability: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    async fn generate(&self, request: &CapabilityRequest) -> Result<ModelReply, CapabilityError>;
}
