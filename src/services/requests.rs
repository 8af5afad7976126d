//! Request handling behind the two tool pages.
//!
//! The GUI hands over whatever is in a text area; these functions normalise it, run the
//! pre-validation the pattern page needs, call into [`join`](super::join) or
//! [`pattern`](super::pattern) and turn the outcome into the text shown in the result label.

use super::join::{join_lines, non_blank_lines};
use super::pattern::masked_pattern;
use std::collections::BTreeSet;
use std::fmt;

pub const NO_STRINGS_MESSAGE: &str = "Enter at least one string.";
pub const MIXED_LENGTHS_MESSAGE: &str = "All strings must share the same length.";

/// Outcome of a "Build Pattern" request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternOutcome {
    /// The masked pattern was built
    Pattern(String),

    /// No non-blank line was entered
    NoStrings,

    /// Lines differ in length; the distinct lengths seen, ascending
    MixedLengths { lengths: Vec<usize> },

    /// The pattern builder rejected the batch
    Failed(String),
}

impl PatternOutcome {
    /// Text displayed in the pattern page's result label
    pub fn label(&self) -> String {
        match self {
            Self::Pattern(pattern) => pattern.clone(),
            Self::NoStrings => NO_STRINGS_MESSAGE.to_string(),
            Self::MixedLengths { .. } => MIXED_LENGTHS_MESSAGE.to_string(),
            Self::Failed(message) => format!("Error: {}", message),
        }
    }

    /// True if a pattern was produced
    pub fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }
}

impl fmt::Display for PatternOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Handle a "Join Lines" request.
pub fn handle_join_request(raw_text: &str) -> String {
    let joined = join_lines(raw_text);
    tracing::debug!(
        input_len = raw_text.len(),
        output_len = joined.len(),
        "Join request handled"
    );
    joined
}

/// Trimmed non-blank lines of a pattern request, in input order.
pub fn pattern_candidates(raw_text: &str) -> Vec<String> {
    non_blank_lines(raw_text)
        .map(|line| line.trim().to_string())
        .collect()
}

/// Handle a "Build Pattern" request.
///
/// Rejects empty input and mixed-length input before the pattern builder is called.
pub fn handle_pattern_request(raw_text: &str) -> PatternOutcome {
    let values = pattern_candidates(raw_text);
    if values.is_empty() {
        tracing::debug!("Pattern request rejected: no strings");
        return PatternOutcome::NoStrings;
    }

    let lengths: BTreeSet<usize> = values.iter().map(|v| v.chars().count()).collect();
    if lengths.len() != 1 {
        tracing::debug!("Pattern request rejected: mixed lengths {:?}", lengths);
        return PatternOutcome::MixedLengths {
            lengths: lengths.into_iter().collect(),
        };
    }

    match masked_pattern(&values) {
        Ok(pattern) => {
            tracing::debug!(strings = values.len(), "Pattern request handled");
            PatternOutcome::Pattern(pattern)
        }
        Err(e) => {
            tracing::warn!("Pattern builder failed: {}", e);
            PatternOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_request() {
        assert_eq!(handle_join_request("x\n\ny"), "x; y");
        assert_eq!(handle_join_request(""), "");
    }

    #[test]
    fn test_pattern_candidates_are_trimmed() {
        assert_eq!(
            pattern_candidates("  abc \n\n\tabd\n   "),
            vec!["abc".to_string(), "abd".to_string()]
        );
    }

    #[test]
    fn test_pattern_request_no_strings() {
        let outcome = handle_pattern_request(" \n\n ");
        assert_eq!(outcome, PatternOutcome::NoStrings);
        assert_eq!(outcome.label(), "Enter at least one string.");
    }

    #[test]
    fn test_pattern_request_mixed_lengths() {
        let outcome = handle_pattern_request("abc\nabcd\nab");
        assert_eq!(
            outcome,
            PatternOutcome::MixedLengths {
                lengths: vec![2, 3, 4]
            }
        );
        assert_eq!(outcome.label(), "All strings must share the same length.");
    }

    #[test]
    fn test_pattern_request_builds_pattern() {
        let outcome = handle_pattern_request("0700123\n 0700456 \n");
        assert_eq!(outcome, PatternOutcome::Pattern("0700XXX".to_string()));
        assert_eq!(outcome.label(), "0700XXX");
        assert!(outcome.is_pattern());
    }

    #[test]
    fn test_lengths_counted_in_characters() {
        let outcome = handle_pattern_request("héllo\nhélp!");
        assert_eq!(outcome, PatternOutcome::Pattern("hélXX".to_string()));
    }

    #[test]
    fn test_failed_label() {
        let outcome = PatternOutcome::Failed("strings must contain at least one element".into());
        assert_eq!(
            outcome.to_string(),
            "Error: strings must contain at least one element"
        );
        assert!(!outcome.is_pattern());
    }
}
