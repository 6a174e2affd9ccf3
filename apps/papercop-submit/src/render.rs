use std::fmt::Write;

use verdict_core::{RiskLevel, Verdict};

const RULE: &str = "------------------------------------------------------------";

/// Plain-text report for a verdict
pub fn render_verdict(verdict: &Verdict, show_reasoning: bool) -> String {
    let marker = match verdict.risk_level() {
        RiskLevel::Elevated => "[!]",
        RiskLevel::Low => "[ok]",
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} {}", marker, verdict.file_name);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{}%", format_percentage(verdict.retracted_percentage));
    let _ = writeln!(out, "Likelihood this paper should be retracted");
    let _ = writeln!(out);
    let _ = writeln!(out, "Analysis Summary");
    let _ = writeln!(out, "{}", verdict.analysis);

    if show_reasoning {
        let _ = writeln!(out);
        let _ = writeln!(out, "Detailed Analysis Process");
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "{}", verdict.chain_of_thought);
    } else {
        let _ = writeln!(out);
        let _ = writeln!(out, "(run with --show-reasoning for the detailed analysis process)");
    }

    out
}

fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn verdict(percentage: f64) -> Verdict {
        Verdict {
            retracted_percentage: percentage,
            analysis: "The results cannot be trusted.".to_string(),
            chain_of_thought: "Step one.\n\nStep two. [[85%]]".to_string(),
            file_name: "paper.pdf".to_string(),
        }
    }

    #[test]
    fn test_elevated_verdict_report() {
        let report = render_verdict(&verdict(85.0), false);
        assert!(report.starts_with("[!] paper.pdf\n"));
        assert!(report.contains("\n85%\nLikelihood this paper should be retracted\n"));
        assert!(report.contains("The results cannot be trusted."));
        assert!(!report.contains("Step two."));
        assert!(report.contains("--show-reasoning"));
    }

    #[test]
    fn test_low_verdict_with_reasoning() {
        let report = render_verdict(&verdict(50.0), true);
        assert!(report.starts_with("[ok] paper.pdf\n"));
        assert!(report.contains("Detailed Analysis Process"));
        assert!(report.contains("Step one.\n\nStep two. [[85%]]"));
    }

    #[test]
    fn test_fractional_percentage() {
        assert_eq!(format_percentage(33.5), "33.5");
        assert_eq!(format_percentage(0.0), "0");
        assert_eq!(format_percentage(100.0), "100");
    }
}
