//! Summary extraction from a free-text review

use lazy_static::lazy_static;
use regex::Regex;

/// Returned when the reply has no usable text at all
pub const SUMMARY_PLACEHOLDER: &str = "Analysis not found";

/// A labelled section must be longer than this to be accepted
const MIN_LABELLED_CHARS: usize = 10;

/// Paragraphs longer than this are preferred as summaries
const SUBSTANTIAL_PARAGRAPH_CHARS: usize = 100;

lazy_static! {
    /// "Conclusion:" or "Summary:" followed by text up to a blank line.
    /// The text may start on the label's line or the next one, never after a blank line.
    static ref LABELLED_SECTION_PATTERN: Regex = Regex::new(
        r"(?is)(?:conclusion|summary):[ \t]*(?:\r?\n)?[ \t]*([^\r\n].*?)(?:\r?\n[ \t\r]*\n|$)"
    )
    .unwrap();

    /// One or more blank lines, LF or CRLF
    static ref PARAGRAPH_BREAK_PATTERN: Regex = Regex::new(r"\r?\n[ \t\r]*\n").unwrap();
}

/// Pick the summary of a review reply.
///
/// Order: a labelled conclusion/summary section, then the last substantial
/// paragraph, then the last paragraph, then [`SUMMARY_PLACEHOLDER`].
pub fn extract_summary(text: &str) -> String {
    if let Some(section) = labelled_section(text) {
        return section.to_string();
    }

    let paragraphs = split_paragraphs(text);
    paragraphs
        .iter()
        .rev()
        .find(|p| p.chars().count() > SUBSTANTIAL_PARAGRAPH_CHARS)
        .or_else(|| paragraphs.last())
        .map(|p| p.to_string())
        .unwrap_or_else(|| SUMMARY_PLACEHOLDER.to_string())
}

/// Trimmed text of the first labelled section, if long enough
pub fn labelled_section(text: &str) -> Option<&str> {
    LABELLED_SECTION_PATTERN
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|section| section.chars().count() > MIN_LABELLED_CHARS)
}

/// Non-empty, trimmed paragraphs in order
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK_PATTERN
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
