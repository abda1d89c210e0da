//! Parsed syntax trees and their declarations.

use std::sync::{Arc, Weak};

use callscope_host::{SharedDocument, TextDocument};
use lsp_types::{Range, Uri};

/// Versioned parse result for one document.
///
/// A tree is never mutated. When its document changes the index parses a new
/// tree and drops this one together with its declarations.
#[derive(Debug)]
pub struct SyntaxTree {
    document: SharedDocument,
    version: i32,
    declarations: Vec<Declaration>,
}

impl SyntaxTree {
    pub(crate) fn new(document: SharedDocument, declarations: Vec<Declaration>) -> Self {
        let version = document.version();
        Self {
            document,
            version,
            declarations,
        }
    }

    /// Snapshot the tree was parsed from.
    #[must_use]
    pub const fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// Identity of the parsed document.
    #[must_use]
    pub fn uri(&self) -> &Uri {
        self.document.uri()
    }

    /// Document version the tree reflects.
    #[must_use]
    pub const fn version(&self) -> i32 {
        self.version
    }

    /// Declarations in source order. Names may repeat.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Whether the tree still reflects `document`.
    #[must_use]
    pub fn is_current(&self, document: &dyn TextDocument) -> bool {
        self.version == document.version()
    }
}

/// A function declaration found by the parser.
///
/// Ranges nest as `full.start <= name.start <= name.end <= body.start <=
/// body.end <= full.end`. The owning tree is held weakly; once the index
/// replaces that tree, [`Declaration::tree`] returns `None`.
#[derive(Debug, Clone)]
pub struct Declaration {
    name: String,
    uri: Uri,
    full_range: Range,
    name_range: Range,
    body_range: Range,
    tree: Weak<SyntaxTree>,
}

impl Declaration {
    pub(crate) const fn new(
        name: String,
        uri: Uri,
        ranges: DeclarationRanges,
        tree: Weak<SyntaxTree>,
    ) -> Self {
        Self {
            name,
            uri,
            full_range: ranges.full,
            name_range: ranges.name,
            body_range: ranges.body,
            tree,
        }
    }

    /// Declared identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Document containing the declaration.
    #[must_use]
    pub const fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Header line through the closing brace line.
    #[must_use]
    pub const fn full_range(&self) -> Range {
        self.full_range
    }

    /// The identifier in the header.
    #[must_use]
    pub const fn name_range(&self) -> Range {
        self.name_range
    }

    /// Lines between the header and the closing brace.
    #[must_use]
    pub const fn body_range(&self) -> Range {
        self.body_range
    }

    /// Owning tree, while it is still alive.
    #[must_use]
    pub fn tree(&self) -> Option<Arc<SyntaxTree>> {
        self.tree.upgrade()
    }
}

impl PartialEq for Declaration {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.uri == other.uri
            && self.full_range == other.full_range
            && Weak::ptr_eq(&self.tree, &other.tree)
    }
}

impl Eq for Declaration {}

/// Ranges captured while a declaration is being parsed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DeclarationRanges {
    pub(crate) full: Range,
    pub(crate) name: Range,
    pub(crate) body: Range,
}
