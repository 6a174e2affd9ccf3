//! Transport encoding for uploaded documents
//!
//! Documents travel inside JSON bodies as standard base64. Browsers that read
//! files with `FileReader.readAsDataURL` prepend a `data:<mime>;base64,`
//! prefix, which is removed before the content is used.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Media type sent alongside every document
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Default upload cap, 10 MB
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// Encode raw document bytes for a JSON request body
pub fn encode_document(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode a base64 document, tolerating a data-URI prefix and surrounding whitespace
pub fn decode_document(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    BASE64.decode(strip_data_uri_prefix(encoded).trim())
}

/// Strip a `data:...,` prefix if present.
///
/// Only strings starting with `data:` are touched; everything after the first
/// comma is returned. A `data:` string with nothing after the comma is
/// returned unchanged.
pub fn strip_data_uri_prefix(content: &str) -> &str {
    if !content.starts_with("data:") {
        return content;
    }
    match content.split_once(',') {
        Some((_, payload)) if !payload.is_empty() => payload,
        _ => content,
    }
}
