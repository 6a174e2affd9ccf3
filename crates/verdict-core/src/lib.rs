//! Verdict extraction for retraction reviews
//!
//! Turns the free-text reply of a generative model into a structured
//! [`Verdict`]: a retraction likelihood, a short summary and the complete
//! reasoning. Also holds the wire types and the base64 helpers shared by the
//! server and the submitter.

pub mod encoding;
pub mod error;
pub mod extract;
pub mod types;

pub use error::ExtractionError;
pub use extract::{extract_from_reply, extract_verdict};
pub use types::{AnalysisRequest, ContentSegment, ModelReply, RiskLevel, Verdict};
