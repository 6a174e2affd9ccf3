//! Local document validation
//!
//! Only PDF files under the size cap are accepted. Every check runs before
//! anything is sent over the network.

use std::path::Path;

use verdict_core::encoding::encode_document;
use verdict_core::AnalysisRequest;

use crate::error::SubmitError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// A validated PDF ready to submit
#[derive(Debug, Clone)]
pub struct DocumentFile {
    name: String,
    bytes: Vec<u8>,
}

impl DocumentFile {
    /// Read and validate a PDF from disk
    pub fn from_path(path: &Path, max_bytes: usize) -> Result<Self, SubmitError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| SubmitError::InvalidFile(format!("{} is not a file", path.display())))?;
        check_extension(&name)?;

        let metadata = std::fs::metadata(path).map_err(|source| SubmitError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        check_size(metadata.len() as usize, max_bytes)?;

        let bytes = std::fs::read(path).map_err(|source| SubmitError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_bytes(name, bytes, max_bytes)
    }

    /// Validate an in-memory PDF
    pub fn from_bytes(
        name: impl Into<String>,
        bytes: Vec<u8>,
        max_bytes: usize,
    ) -> Result<Self, SubmitError> {
        let name = name.into();
        check_extension(&name)?;
        check_size(bytes.len(), max_bytes)?;
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(SubmitError::InvalidFile(format!(
                "{} is not a valid PDF (missing %PDF- header)",
                name
            )));
        }
        Ok(Self { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Encode for the analyze endpoint
    pub fn to_request(&self) -> AnalysisRequest {
        AnalysisRequest {
            document_name: self.name.clone(),
            document_base64: encode_document(&self.bytes),
        }
    }
}

/// Byte cap for a size given in megabytes
pub fn size_limit_bytes(max_size_mb: usize) -> Result<usize, SubmitError> {
    max_size_mb
        .checked_mul(1024 * 1024)
        .ok_or(SubmitError::InvalidSizeLimit(max_size_mb))
}

fn check_extension(name: &str) -> Result<(), SubmitError> {
    let is_pdf = Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        Ok(())
    } else {
        Err(SubmitError::InvalidFile(format!(
            "{} is not a PDF file",
            name
        )))
    }
}

fn check_size(len: usize, max_bytes: usize) -> Result<(), SubmitError> {
    if len == 0 {
        return Err(SubmitError::InvalidFile("File is empty".to_string()));
    }
    if len > max_bytes {
        return Err(SubmitError::InvalidFile(format!(
            "File is {} bytes; the limit is {} MB",
            len,
            max_bytes / (1024 * 1024)
        )));
    }
    Ok(())
}
