//! Error types for parser construction.

use thiserror::Error;

/// Errors raised while building a [`crate::Parser`].
///
/// Parsing itself never fails: malformed input yields fewer declarations.
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// The function keyword cannot start a header line.
    #[error("function keyword '{0}' must be non-empty and contain no whitespace")]
    InvalidKeyword(String),

    /// The header pattern derived from the keyword failed to compile.
    #[error("failed to compile declaration pattern: {0}")]
    Pattern(#[from] regex::Error),
}
