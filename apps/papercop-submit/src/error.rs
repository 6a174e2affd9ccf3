use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    #[error("Size limit of {0} MB is too large")]
    InvalidSizeLimit(usize),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Analysis failed: {message}")]
    Rejected { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}
