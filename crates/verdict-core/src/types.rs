use serde::{Deserialize, Serialize};

/// A document submitted for review, as carried on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(rename = "fileName")]
    pub document_name: String,
    /// Standard base64 of the PDF bytes, without any data-URI prefix
    #[serde(rename = "fileContent")]
    pub document_base64: String,
}

/// One typed unit of a capability reply.
///
/// Unknown segment types deserialize to [`ContentSegment::Other`] so a new
/// kind of segment never fails the whole reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentSegment {
    Text {
        text: String,
    },
    Thinking {
        thinking: String,
    },
    RedactedThinking,
    #[serde(other)]
    Other,
}

/// Raw reply of the generative capability, segments in receipt order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelReply {
    pub segments: Vec<ContentSegment>,
}

impl ModelReply {
    pub fn new(segments: Vec<ContentSegment>) -> Self {
        Self { segments }
    }

    /// Text of the first plain-text segment, if any
    pub fn first_text(&self) -> Option<&str> {
        self.segments.iter().find_map(|segment| match segment {
            ContentSegment::Text { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Visible reasoning segments, in receipt order
    pub fn reasoning_trace(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                ContentSegment::Thinking { thinking } => Some(thinking.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Structured result of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Retraction likelihood, always finite and within 0..=100
    pub retracted_percentage: f64,
    /// Short summary of the review
    pub analysis: String,
    /// Complete reply text the verdict was derived from
    pub chain_of_thought: String,
    pub file_name: String,
}

/// Coarse reading of a verdict, used to pick how a result is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Elevated,
}

impl Verdict {
    pub fn risk_level(&self) -> RiskLevel {
        if self.retracted_percentage > 50.0 {
            RiskLevel::Elevated
        } else {
            RiskLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_uses_wire_names() {
        let request = AnalysisRequest {
            document_name: "paper.pdf".to_string(),
            document_base64: "JVBERi0=".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "fileName": "paper.pdf", "fileContent": "JVBERi0=" })
        );
    }

    #[test]
    fn test_segments_deserialize_by_type_tag() {
        let reply: Vec<ContentSegment> = serde_json::from_value(serde_json::json!([
            { "type": "thinking", "thinking": "Let me look.", "signature": "abc" },
            { "type": "redacted_thinking", "data": "xyz" },
            { "type": "text", "text": "[[10%]]", "citations": null },
            { "type": "tool_use", "id": "t1", "name": "x", "input": {} }
        ]))
        .unwrap();

        assert_eq!(
            reply,
            vec![
                ContentSegment::Thinking {
                    thinking: "Let me look.".to_string()
                },
                ContentSegment::RedactedThinking,
                ContentSegment::Text {
                    text: "[[10%]]".to_string()
                },
                ContentSegment::Other,
            ]
        );
    }

    #[test]
    fn test_first_text_skips_non_text_segments() {
        let reply = ModelReply::new(vec![
            ContentSegment::Thinking {
                thinking: "hmm".to_string(),
            },
            ContentSegment::Text {
                text: "first".to_string(),
            },
            ContentSegment::Text {
                text: "second".to_string(),
            },
        ]);
        assert_eq!(reply.first_text(), Some("first"));
        assert_eq!(reply.reasoning_trace(), vec!["hmm"]);
    }

    #[test]
    fn test_first_text_none_without_text() {
        let reply = ModelReply::new(vec![ContentSegment::RedactedThinking]);
        assert_eq!(reply.first_text(), None);
    }

    #[test]
    fn test_risk_level_threshold() {
        let mut verdict = Verdict {
            retracted_percentage: 50.0,
            analysis: String::new(),
            chain_of_thought: String::new(),
            file_name: "a.pdf".to_string(),
        };
        assert_eq!(verdict.risk_level(), RiskLevel::Low);
        verdict.retracted_percentage = 50.5;
        assert_eq!(verdict.risk_level(), RiskLevel::Elevated);
    }

    #[test]
    fn test_verdict_wire_names() {
        let verdict = Verdict {
            retracted_percentage: 85.0,
            analysis: "bad".to_string(),
            chain_of_thought: "reply".to_string(),
            file_name: "a.pdf".to_string(),
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["retractedPercentage"], 85.0);
        assert_eq!(json["analysis"], "bad");
        assert_eq!(json["chainOfThought"], "reply");
        assert_eq!(json["fileName"], "a.pdf");
    }
}
