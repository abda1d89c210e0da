//! Error types for call hierarchy operations.

use camino::Utf8PathBuf;
use thiserror::Error;

use callscope_host::HostError;

/// Errors returned by call hierarchy operations.
///
/// Missing data (no definition, no references, no enclosing symbol) is not an
/// error; engines report it as `None` or an empty list.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A host navigation query failed.
    #[error(transparent)]
    Host(#[from] HostError),

    /// Failed to resolve the symbol at the given position.
    #[error("no symbol found at {path}:{line}:{column}")]
    SymbolNotFound {
        /// Path to the file containing the position.
        path: Utf8PathBuf,
        /// Line number (0-based).
        line: u32,
        /// Column number (0-based, UTF-16 units).
        column: u32,
    },

    /// The requested node was not found in the graph.
    #[error("node not found: {0}")]
    NodeNotFound(String),
}

impl GraphError {
    /// Creates a new `SymbolNotFound` error.
    #[must_use]
    pub fn symbol_not_found(path: impl Into<Utf8PathBuf>, line: u32, column: u32) -> Self {
        Self::SymbolNotFound {
            path: path.into(),
            line,
            column,
        }
    }

    /// Creates a new `NodeNotFound` error.
    #[must_use]
    pub fn node_not_found(node_id: impl Into<String>) -> Self {
        Self::NodeNotFound(node_id.into())
    }
}
