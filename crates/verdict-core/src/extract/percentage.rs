//! Retraction percentage extraction
//!
//! The model is asked to report its estimate as `[[NN%]]`. Replies do not
//! always comply, so the bracketed form is tried first and a fixed list of
//! phrase patterns follows. The first strategy that yields a number wins.
//! New patterns go into the table; order in the table is priority.

use lazy_static::lazy_static;
use regex::Regex;

/// Upper bound of a likelihood
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Value used when no strategy matches
pub const DEFAULT_PERCENTAGE: f64 = 0.0;

lazy_static! {
    /// `[[73%]]` or `[[73.5]]`, the requested format
    static ref BRACKETED_PATTERN: Regex =
        Regex::new(r"\[\[(\d+(?:\.\d+)?)%?\]\]").unwrap();

    /// Phrase fallbacks, tried in declaration order
    static ref PHRASE_PATTERNS: Vec<(&'static str, Regex)> = vec![
        (
            "probability_of_retraction_is",
            Regex::new(r"(?i)probability\s+of\s+retraction\s+is\s+(\d+(?:\.\d+)?)\s*%").unwrap(),
        ),
        (
            "retraction_probability_of",
            Regex::new(r"(?i)retraction\s+probability\s+of\s+(\d+(?:\.\d+)?)\s*%").unwrap(),
        ),
        (
            "likelihood_of_retraction",
            Regex::new(r"(?i)likelihood\s+of\s+retraction\s*:?\s*(\d+(?:\.\d+)?)\s*%").unwrap(),
        ),
        (
            "retraction_likelihood",
            Regex::new(r"(?i)retraction\s+likelihood\s*:?\s*(\d+(?:\.\d+)?)\s*%").unwrap(),
        ),
        (
            "percent_likelihood",
            Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*%\s*likelihood").unwrap(),
        ),
        (
            "percent_probability",
            Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*%\s*probability").unwrap(),
        ),
        (
            "percent_chance",
            Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*%\s*chance").unwrap(),
        ),
    ];
}

/// Name reported when the bracketed marker matched
pub const BRACKETED_SOURCE: &str = "bracketed";

/// A percentage together with the strategy that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageMatch {
    pub value: f64,
    pub source: &'static str,
}

/// Extract the retraction likelihood, defaulting to 0 when nothing matches
pub fn extract_percentage(text: &str) -> f64 {
    extract_percentage_with_source(text)
        .map(|m| m.value)
        .unwrap_or(DEFAULT_PERCENTAGE)
}

/// Run every strategy in order and report the first hit
pub fn extract_percentage_with_source(text: &str) -> Option<PercentageMatch> {
    std::iter::once((BRACKETED_SOURCE, &*BRACKETED_PATTERN))
        .chain(PHRASE_PATTERNS.iter().map(|(name, re)| (*name, re)))
        .find_map(|(name, re)| {
            capture_number(re, text).map(|value| PercentageMatch {
                value: value.min(MAX_PERCENTAGE),
                source: name,
            })
        })
}

fn capture_number(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
