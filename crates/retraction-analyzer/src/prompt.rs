//! Fixed review instructions sent with every document

use verdict_core::encoding::PDF_MEDIA_TYPE;

use crate::capability::CapabilityRequest;
use crate::config::AnalyzerConfig;

/// System-level persona
pub const SYSTEM_PROMPT: &str = "You are PaperCop, a domain-specialist academic reviewer. \
Your job is to judge whether a research paper is flawed badly enough that it should be \
retracted from the scientific literature.";

/// Formatting directive the extractor relies on
pub const FORMAT_DIRECTIVE: &str = "At the very end of your response, state the probability \
that this paper should be retracted as a percentage enclosed in double square brackets, \
for example [[42%]]. Use this format exactly once.";

/// Things a reviewer screens for
pub const REVIEW_FACTORS: &[&str] = &[
    "Evidence of data fabrication or falsification",
    "Plagiarism or self-plagiarism",
    "Methodological errors that invalidate the results",
    "Ethical violations in research conduct",
    "Conflicts of interest that were not disclosed",
    "Image manipulation or duplication",
    "Statistical errors or p-hacking",
];

/// User instruction accompanying the attached document
pub fn review_instruction() -> String {
    let factors = REVIEW_FACTORS
        .iter()
        .enumerate()
        .map(|(i, factor)| format!("{}. {}", i + 1, factor))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "The attached PDF is an academic paper. Write an expert-level, harsh-but-fair peer \
review of it, then estimate the probability that it should be retracted.\n\n\
In your review, consider factors such as:\n{}\n\n\
Finish with a short paragraph starting with \"Conclusion:\" that summarises your verdict.\n\n{}",
        factors, FORMAT_DIRECTIVE
    )
}

/// Assemble the capability request for one document
pub fn build_request(config: &AnalyzerConfig, document_base64: &str) -> CapabilityRequest {
    CapabilityRequest {
        model: config.model.clone(),
        system: SYSTEM_PROMPT.to_string(),
        instruction: review_instruction(),
        document_base64: document_base64.to_string(),
        media_type: PDF_MEDIA_TYPE.to_string(),
        max_output_tokens: config.max_output_tokens,
        reasoning_budget: config.reasoning_budget(),
    }
}
