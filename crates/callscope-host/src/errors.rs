//! Error types surfaced by host navigation queries.

use std::error::Error;
use std::fmt;

use thiserror::Error;

/// Query being executed when the host failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOperation {
    /// Go-to-definition lookup.
    Definition,
    /// Find-references lookup.
    References,
    /// Document outline lookup.
    DocumentSymbols,
}

impl fmt::Display for HostOperation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Definition => "definition",
            Self::References => "references",
            Self::DocumentSymbols => "documentSymbol",
        };
        formatter.write_str(label)
    }
}

/// Failure reported by a [`crate::NavigationHost`].
///
/// The core never retries or recovers; these errors travel unchanged to the
/// caller of the call hierarchy operation.
#[derive(Debug, Error)]
#[error("host {operation} query failed: {message}")]
pub struct HostError {
    operation: HostOperation,
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl HostError {
    /// Builds an error without an underlying source.
    #[must_use]
    pub fn new(operation: HostOperation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
            source: None,
        }
    }

    /// Builds an error that wraps an underlying source.
    #[must_use]
    pub fn with_source(
        operation: HostOperation,
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            operation,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Query that failed.
    #[must_use]
    pub const fn operation(&self) -> HostOperation {
        self.operation
    }

    /// Human-friendly description without the optional source.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }
}
