//! Error types for ingestion adapters.

use thiserror::Error;

/// Errors that can occur while parsing captured request text.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The cURL command line could not be split into shell words.
    #[error("invalid shell syntax: {reason}\n  Suggestion: {suggestion}")]
    Tokenize {
        /// Why tokenization failed
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },
}

impl ParseError {
    /// Creates a `Tokenize` error for a quote that never closes.
    #[must_use]
    pub fn unterminated_quote(quote: char) -> Self {
        Self::Tokenize {
            reason: format!("unterminated {quote} quote"),
            suggestion: "Ensure quotes are closed".to_string(),
        }
    }

    /// Creates a `Tokenize` error for a trailing backslash with nothing to escape.
    #[must_use]
    pub fn dangling_escape() -> Self {
        Self::Tokenize {
            reason: "trailing backslash with no character to escape".to_string(),
            suggestion: "Remove the trailing backslash or escape a character".to_string(),
        }
    }
}
