//! Versioned cache of syntax trees keyed by document identity.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use callscope_host::SharedDocument;
use lsp_types::{Position, Uri};

use crate::parser::Parser;
use crate::tree::{Declaration, SyntaxTree};

/// Most recent [`SyntaxTree`] for every document seen so far.
///
/// The cache holds one entry per URI, in first-seen order. An entry is
/// replaced in place when a newer document version is parsed and is never
/// removed, so the index grows with the number of distinct documents.
/// Lookups that span documents (`find_by_name`, `all_functions`) walk the
/// entries in that order.
#[derive(Debug)]
pub struct SyntaxIndex {
    parser: Parser,
    trees: Mutex<Vec<Arc<SyntaxTree>>>,
}

impl SyntaxIndex {
    /// Creates an empty index that parses with `parser`.
    #[must_use]
    pub const fn new(parser: Parser) -> Self {
        Self {
            parser,
            trees: Mutex::new(Vec::new()),
        }
    }

    /// Returns a tree matching the document's current version.
    ///
    /// The cached tree is returned as-is while the versions agree; any
    /// version change triggers a full re-parse.
    pub fn ensure_tree(&self, document: &SharedDocument) -> Arc<SyntaxTree> {
        let mut trees = self.lock();
        let slot = trees.iter().position(|tree| tree.uri() == document.uri());

        if let Some(cached) = slot.and_then(|index| trees.get(index))
            && cached.is_current(document.as_ref())
        {
            tracing::trace!(
                uri = document.uri().as_str(),
                version = cached.version(),
                "syntax tree cache hit"
            );
            return Arc::clone(cached);
        }

        let tree = self.parser.parse(Arc::clone(document));
        tracing::debug!(
            uri = document.uri().as_str(),
            version = tree.version(),
            declarations = tree.declarations().len(),
            "parsed document"
        );
        match slot.and_then(|index| trees.get_mut(index)) {
            Some(entry) => *entry = Arc::clone(&tree),
            None => trees.push(Arc::clone(&tree)),
        }
        tree
    }

    /// Cached tree for `uri`, whatever its version.
    #[must_use]
    pub fn tree(&self, uri: &Uri) -> Option<Arc<SyntaxTree>> {
        self.lock().iter().find(|tree| tree.uri() == uri).cloned()
    }

    /// First declaration called `name`.
    ///
    /// Trees are searched in first-seen order and declarations in source
    /// order; later declarations with the same name are never returned.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<Declaration> {
        self.trees_snapshot().iter().find_map(|tree| {
            tree.declarations()
                .iter()
                .find(|declaration| declaration.name() == name)
                .cloned()
        })
    }

    /// Declaration named by the word under `position`.
    ///
    /// The document's tree is brought up to date first, so a declaration in
    /// the queried document itself can always be found.
    #[must_use]
    pub fn find(&self, document: &SharedDocument, position: Position) -> Option<Declaration> {
        let range = document.word_range_at(position)?;
        let word = document.text_in(range).to_owned();
        self.ensure_tree(document);
        self.find_by_name(&word)
    }

    /// Every cached declaration, tree by tree.
    ///
    /// Each call starts a fresh traversal over the trees cached at that
    /// moment.
    pub fn all_functions(&self) -> impl Iterator<Item = Declaration> {
        self.trees_snapshot()
            .into_iter()
            .flat_map(|tree| tree.declarations().to_vec())
    }

    /// Number of cached documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no document has been parsed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn trees_snapshot(&self) -> Vec<Arc<SyntaxTree>> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Arc<SyntaxTree>>> {
        self.trees.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
