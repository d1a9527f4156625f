//! Completion answer parsing for the termination check

use serde::{Deserialize, Serialize};

/// Outcome of a termination check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminationVerdict {
    Complete,
    Continue,
}

impl TerminationVerdict {
    pub fn is_complete(&self) -> bool {
        matches!(self, TerminationVerdict::Complete)
    }
}

/// Interpret a model's yes/no answer.
///
/// Only an answer whose first word is "yes" (any case, surrounding quotes
/// and punctuation ignored) completes the chat. Everything else, including
/// an empty answer, means continue.
pub fn parse_completion_answer(answer: &str) -> TerminationVerdict {
    let normalized = answer
        .trim()
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    let first_word = normalized
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or("");

    if first_word == "yes" {
        TerminationVerdict::Complete
    } else {
        TerminationVerdict::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_variants_complete() {
        for answer in ["yes", "Yes", "YES.", "\"yes\"", "  yes\n", "Yes, the user approved it."] {
            assert_eq!(
                parse_completion_answer(answer),
                TerminationVerdict::Complete,
                "answer: {answer:?}"
            );
        }
    }

    #[test]
    fn test_other_answers_continue() {
        for answer in ["no", "No.", "", "maybe", "yesterday", "not yes", "The user said yes"] {
            assert_eq!(
                parse_completion_answer(answer),
                TerminationVerdict::Continue,
                "answer: {answer:?}"
            );
        }
    }

    #[test]
    fn test_is_complete() {
        assert!(TerminationVerdict::Complete.is_complete());
        assert!(!TerminationVerdict::Continue.is_complete());
    }
}
