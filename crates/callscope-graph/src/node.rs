//! Call graph node representation.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use lsp_types::{Range, Uri};

use crate::uri::uri_to_path;

/// Unique identifier for a node in the call graph.
///
/// The format is `{path}:{line}:{column}:{name}`, where line and column are
/// the start of the symbol's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a new node ID from its components.
    #[must_use]
    pub fn new(path: &Utf8Path, line: u32, column: u32, name: &str) -> Self {
        Self(format!("{path}:{line}:{column}:{name}"))
    }

    /// Returns the string representation of this node ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of symbol represented by a call graph node.
///
/// Mirrors the callable subset of LSP's `SymbolKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// A function definition.
    Function,
    /// A method on a class or struct.
    Method,
    /// A class constructor.
    Constructor,
    /// A property getter or setter.
    Property,
    /// Anything else the outline reports.
    Unknown,
}

impl SymbolKind {
    /// Converts from LSP `SymbolKind` to the graph's kind.
    #[must_use]
    pub const fn from_lsp(kind: lsp_types::SymbolKind) -> Self {
        match kind {
            lsp_types::SymbolKind::FUNCTION => Self::Function,
            lsp_types::SymbolKind::METHOD => Self::Method,
            lsp_types::SymbolKind::CONSTRUCTOR => Self::Constructor,
            lsp_types::SymbolKind::PROPERTY => Self::Property,
            _ => Self::Unknown,
        }
    }
}

/// A node in the call graph representing a callable symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallNode {
    id: NodeId,
    name: String,
    kind: SymbolKind,
    uri: Uri,
    path: Utf8PathBuf,
    range: Range,
    selection_range: Range,
    container: Option<String>,
}

impl CallNode {
    /// Creates a new call node.
    ///
    /// `range` spans the whole symbol and `selection_range` its name; the
    /// node ID is derived from the start of `selection_range`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: SymbolKind,
        uri: Uri,
        range: Range,
        selection_range: Range,
    ) -> Self {
        let symbol_name = name.into();
        let path = uri_to_path(&uri);
        let id = NodeId::new(
            &path,
            selection_range.start.line,
            selection_range.start.character,
            &symbol_name,
        );
        Self {
            id,
            name: symbol_name,
            kind,
            uri,
            path,
            range,
            selection_range,
            container: None,
        }
    }

    /// Creates a new call node with a container.
    #[must_use]
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    /// Returns the unique identifier for this node.
    #[must_use]
    pub const fn id(&self) -> &NodeId {
        &self.id
    }

    /// Returns the name of the symbol.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the kind of symbol.
    #[must_use]
    pub const fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Returns the URI of the document containing this symbol.
    #[must_use]
    pub const fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the path to the file containing this symbol.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns the range covering the whole symbol.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Returns the range covering the symbol's name.
    #[must_use]
    pub const fn selection_range(&self) -> Range {
        self.selection_range
    }

    /// Returns the container name if present.
    #[must_use]
    pub fn container(&self) -> Option<&str> {
        self.container.as_deref()
    }

    /// Returns the fully qualified name including the container.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        self.container.as_ref().map_or_else(
            || self.name.clone(),
            |container| format!("{container}.{}", self.name),
        )
    }
}
