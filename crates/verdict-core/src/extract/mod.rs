//! Reduction of a free-text model reply to a [`Verdict`]
//!
//! Parsing never fails on content: a missing percentage becomes 0 and a
//! missing summary becomes a placeholder. The only failure is a reply with
//! no text segment at all.

pub mod percentage;
pub mod summary;

pub use percentage::{extract_percentage, extract_percentage_with_source, PercentageMatch};
pub use summary::{extract_summary, SUMMARY_PLACEHOLDER};

use crate::error::ExtractionError;
use crate::types::{ModelReply, Verdict};

/// Build a verdict from the reply text. `chain_of_thought` is the text unchanged.
pub fn extract_verdict(reply_text: &str, document_name: &str) -> Verdict {
    Verdict {
        retracted_percentage: extract_percentage(reply_text),
        analysis: extract_summary(reply_text),
        chain_of_thought: reply_text.to_string(),
        file_name: document_name.to_string(),
    }
}

/// Build a verdict from a segmented reply.
///
/// Extraction runs on the first text segment. Visible reasoning segments,
/// when the capability returned any, are placed before the reply text in
/// receipt order so the full chain of thought stays readable.
pub fn extract_from_reply(
    reply: &ModelReply,
    document_name: &str,
) -> Result<Verdict, ExtractionError> {
    let text = reply.first_text().ok_or(ExtractionError::NoTextContent)?;
    let mut verdict = extract_verdict(text, document_name);

    let reasoning = reply.reasoning_trace();
    if !reasoning.is_empty() {
        let mut parts = reasoning;
        parts.push(text);
        verdict.chain_of_thought = parts.join("\n\n");
    }

    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentSegment;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_conclusion_example() {
        let reply = "This paper shows severe flaws.\n\nConclusion: The results cannot be trusted and should be retracted.\n\n[[85%]]";
        let verdict = extract_verdict(reply, "paper.pdf");
        assert_eq!(
            verdict,
            Verdict {
                retracted_percentage: 85.0,
                analysis: "The results cannot be trusted and should be retracted.".to_string(),
                chain_of_thought: reply.to_string(),
                file_name: "paper.pdf".to_string(),
            }
        );
    }

    #[test]
    fn test_unbracketed_phrase_example() {
        let reply = "... 42% probability of retraction based on the evidence.";
        assert_eq!(extract_verdict(reply, "p.pdf").retracted_percentage, 42.0);
    }

    #[test]
    fn test_unparseable_reply_degrades() {
        let verdict = extract_verdict("I cannot assess this document.", "p.pdf");
        assert_eq!(verdict.retracted_percentage, 0.0);
        assert_eq!(verdict.analysis, "I cannot assess this document.");
    }

    #[test]
    fn test_reply_without_text_fails() {
        let reply = ModelReply::new(vec![ContentSegment::Thinking {
            thinking: "...".to_string(),
        }]);
        assert_eq!(
            extract_from_reply(&reply, "p.pdf"),
            Err(ExtractionError::NoTextContent)
        );
        assert_eq!(
            extract_from_reply(&ModelReply::default(), "p.pdf"),
            Err(ExtractionError::NoTextContent)
        );
    }

    #[test]
    fn test_plain_reply_keeps_text_exactly() {
        let text = "  Review.\n\n[[30%]]\n";
        let reply = ModelReply::new(vec![ContentSegment::Text {
            text: text.to_string(),
        }]);
        let verdict = extract_from_reply(&reply, "p.pdf").unwrap();
        assert_eq!(verdict.chain_of_thought, text);
        assert_eq!(verdict.retracted_percentage, 30.0);
    }

    #[test]
    fn test_reasoning_segments_prepended_in_order() {
        let reply = ModelReply::new(vec![
            ContentSegment::Thinking {
                thinking: "Step one.".to_string(),
            },
            ContentSegment::RedactedThinking,
            ContentSegment::Thinking {
                thinking: "Step two.".to_string(),
            },
            ContentSegment::Text {
                text: "Final. [[70%]]".to_string(),
            },
        ]);
        let verdict = extract_from_reply(&reply, "p.pdf").unwrap();
        assert_eq!(verdict.chain_of_thought, "Step one.\n\nStep two.\n\nFinal. [[70%]]");
        assert_eq!(verdict.retracted_percentage, 70.0);
        assert_eq!(verdict.analysis, "Final. [[70%]]");
    }

    proptest! {
        /// Property: the reasoning field is the reply text, byte for byte
        #[test]
        fn chain_of_thought_is_reply(text in "(?s).{0,400}") {
            let verdict = extract_verdict(&text, "doc.pdf");
            prop_assert_eq!(verdict.chain_of_thought, text);
            prop_assert_eq!(verdict.file_name, "doc.pdf");
        }
    }
}
