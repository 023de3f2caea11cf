//! Advisory checks on a rewritten title.
//!
//! The rewrite rules are instructions to the model, not guarantees. These
//! checks only report deviations; the rewrite is applied regardless.

use std::fmt;

use super::{contains_pictographic, strip_emoji};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyWarning {
    /// The rewrite contains no pictographic character at all.
    NoEmojiAdded,
    /// The first word of the original no longer leads the rewrite.
    FirstWordChanged { expected: String, found: Option<String> },
    /// Emoji-only tokens at both the start and the end.
    DecoratedBothEnds,
}

impl fmt::Display for PolicyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyWarning::NoEmojiAdded => write!(f, "no emoji added"),
            PolicyWarning::FirstWordChanged { expected, found } => write!(
                f,
                "first word changed: expected `{}`, found `{}`",
                expected,
                found.as_deref().unwrap_or("")
            ),
            PolicyWarning::DecoratedBothEnds => write!(f, "decorative emoji at both ends"),
        }
    }
}

/// A token made only of emoji and joiners, no letters or digits.
fn is_emoji_token(token: &str) -> bool {
    contains_pictographic(token) && !token.chars().any(char::is_alphanumeric)
}

pub fn check_rewrite(original: &str, rewritten: &str) -> Vec<PolicyWarning> {
    let mut warnings = Vec::new();

    if !contains_pictographic(rewritten) {
        warnings.push(PolicyWarning::NoEmojiAdded);
    }

    if let Some(expected) = original.split_whitespace().next() {
        // Emoji glued to a word ("Pizza🍕") do not change the word itself.
        let found = rewritten
            .split_whitespace()
            .map(strip_emoji)
            .find(|word| !word.is_empty());
        if found.as_deref() != Some(expected) {
            warnings.push(PolicyWarning::FirstWordChanged {
                expected: expected.to_string(),
                found,
            });
        }
    }

    let tokens: Vec<&str> = rewritten.split_whitespace().collect();
    if tokens.len() > 1
        && is_emoji_token(tokens[0])
        && is_emoji_token(tokens[tokens.len() - 1])
    {
        warnings.push(PolicyWarning::DecoratedBothEnds);
    }

    warnings
}
