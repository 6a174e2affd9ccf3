//! Retraction analysis against a generative text capability
//!
//! Builds the review request for an uploaded paper, performs the single
//! bounded call to the capability and reduces the reply to a
//! [`verdict_core::Verdict`].
//!
//! ## Features
//!
//! - `mock`: exposes [`mock::MockCapability`] for downstream tests

pub mod analyzer;
pub mod anthropic;
pub mod capability;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod prompt;

pub use analyzer::{AnalysisPhase, Analyzer};
pub use anthropic::AnthropicClient;
pub use capability::{CapabilityRequest, GenerativeCapability};
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, CapabilityError, ConfigError};
