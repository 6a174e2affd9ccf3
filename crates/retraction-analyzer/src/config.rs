//! Analyzer settings
//!
//! Built once at process start and shared read-only between requests.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "claude-3-7-sonnet-20250219";
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 20_000;
pub const DEFAULT_THINKING_BUDGET_TOKENS: u32 = 16_000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 50_000;
pub const DEFAULT_OVERALL_DEADLINE_S: u64 = 60;

/// Smallest thinking budget the Messages API accepts
pub const MIN_THINKING_BUDGET_TOKENS: u32 = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub model: String,
    /// Caps the reply length
    pub max_output_tokens: u32,
    /// Ask for a visible chain of thought
    pub allow_extended_reasoning: bool,
    pub thinking_budget_tokens: u32,
    /// Bound on the single capability call
    pub request_timeout: Duration,
    /// Bound on the whole analysis
    pub overall_deadline: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            allow_extended_reasoning: true,
            thinking_budget_tokens: DEFAULT_THINKING_BUDGET_TOKENS,
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            overall_deadline: Duration::from_secs(DEFAULT_OVERALL_DEADLINE_S),
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_output_tokens == 0 {
            return Err(ConfigError::ZeroOutputTokens);
        }
        if self.allow_extended_reasoning
            && (self.thinking_budget_tokens < MIN_THINKING_BUDGET_TOKENS
                || self.thinking_budget_tokens >= self.max_output_tokens)
        {
            return Err(ConfigError::InvalidThinkingBudget {
                budget: self.thinking_budget_tokens,
                max_tokens: self.max_output_tokens,
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroDuration("request timeout"));
        }
        if self.overall_deadline.is_zero() {
            return Err(ConfigError::ZeroDuration("overall deadline"));
        }
        Ok(())
    }

    /// Thinking budget to request, if extended reasoning is on
    pub fn reasoning_budget(&self) -> Option<u32> {
        self.allow_extended_reasoning
            .then_some(self.thinking_budget_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_budget_must_stay_below_max_tokens() {
        let config = AnalyzerConfig {
            max_output_tokens: 4000,
            thinking_budget_tokens: 4000,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidThinkingBudget {
                budget: 4000,
                max_tokens: 4000
            })
        );
    }

    #[test]
    fn test_budget_ignored_without_reasoning() {
        let config = AnalyzerConfig {
            max_output_tokens: 4000,
            allow_extended_reasoning: false,
            thinking_budget_tokens: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.reasoning_budget(), None);
    }

    #[test]
    fn test_zero_durations_rejected() {
        let config = AnalyzerConfig {
            overall_deadline: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDuration("overall deadline"))
        );
    }
}
