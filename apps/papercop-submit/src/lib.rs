//! Command-line submitter for the PaperCop server
//!
//! Validates a local PDF, sends it to `/api/analyze` and renders the verdict.

pub mod client;
pub mod document;
pub mod error;
pub mod render;

pub use client::{Submitter, SubmitterConfig, DEFAULT_SERVER_URL};
pub use document::{size_limit_bytes, DocumentFile};
pub use error::SubmitError;
pub use render::render_verdict;
