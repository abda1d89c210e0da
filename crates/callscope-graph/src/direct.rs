//! Call hierarchy by searching function bodies for declared names.

use std::slice;
use std::sync::Arc;

use callscope_host::SharedDocument;
use callscope_syntax::{Declaration, SyntaxIndex};
use lsp_types::{Location, Position, Range};
use tracing::{debug, trace};

use crate::edge::EdgeSource;
use crate::engine::{CallHierarchyEngine, IncomingCall, OutgoingCall};
use crate::error::GraphError;
use crate::node::{CallNode, SymbolKind};

/// Engine backed by the `abc` syntax index.
///
/// A call is any substring occurrence of a declared function name inside a
/// function body. Occurrences inside longer identifiers count, and a
/// function whose body mentions its own name calls itself.
#[derive(Debug, Clone)]
pub struct DirectSearchEngine {
    index: Arc<SyntaxIndex>,
}

/// Occurrences of one name inside one body.
struct CallRecord {
    name: String,
    sites: Vec<Location>,
}

impl DirectSearchEngine {
    /// Creates an engine over `index`.
    #[must_use]
    pub const fn new(index: Arc<SyntaxIndex>) -> Self {
        Self { index }
    }

    /// Returns the underlying syntax index.
    #[must_use]
    pub const fn index(&self) -> &Arc<SyntaxIndex> {
        &self.index
    }

    /// Resolves the declaration named by the word under `position`.
    #[must_use]
    pub fn prepare(&self, document: &SharedDocument, position: Position) -> Option<Declaration> {
        self.index.find(document, position)
    }

    /// Functions mentioned in the body of `anchor`.
    ///
    /// Candidate names are the distinct names of every indexed declaration,
    /// searched in descending lexicographic order; each name maps to the
    /// first declaration with that name.
    #[must_use]
    pub fn outgoing_calls(&self, anchor: &Declaration) -> Vec<OutgoingCall<Declaration>> {
        let mut names: Vec<String> = self
            .index
            .all_functions()
            .map(|declaration| declaration.name().to_owned())
            .collect();
        names.sort_unstable();
        names.dedup();
        names.reverse();

        let calls: Vec<_> = find_calls(anchor, &names)
            .into_iter()
            .filter_map(|record| {
                let to = self.index.find_by_name(&record.name)?;
                Some(OutgoingCall {
                    to,
                    sites: record.sites,
                })
            })
            .collect();
        debug!(anchor = anchor.name(), calls = calls.len(), "outgoing calls");
        calls
    }

    /// Functions whose bodies mention the name of `anchor`.
    ///
    /// Callers come back in index order, so a self-referencing anchor lists
    /// itself.
    #[must_use]
    pub fn incoming_calls(&self, anchor: &Declaration) -> Vec<IncomingCall<Declaration>> {
        let name = anchor.name().to_owned();
        let calls: Vec<_> = self
            .index
            .all_functions()
            .filter_map(|caller| {
                let [record] = <[CallRecord; 1]>::try_from(find_calls(
                    &caller,
                    slice::from_ref(&name),
                ))
                .ok()?;
                Some(IncomingCall {
                    from: caller,
                    sites: record.sites,
                })
            })
            .collect();
        debug!(anchor = anchor.name(), calls = calls.len(), "incoming calls");
        calls
    }
}

impl CallHierarchyEngine for DirectSearchEngine {
    type Item = Declaration;

    const SOURCE: EdgeSource = EdgeSource::DirectSearch;

    async fn prepare(
        &self,
        document: &SharedDocument,
        position: Position,
    ) -> Result<Option<Declaration>, GraphError> {
        Ok(Self::prepare(self, document, position))
    }

    async fn incoming_calls(
        &self,
        item: &Declaration,
    ) -> Result<Vec<IncomingCall<Declaration>>, GraphError> {
        Ok(Self::incoming_calls(self, item))
    }

    async fn outgoing_calls(
        &self,
        item: &Declaration,
    ) -> Result<Vec<OutgoingCall<Declaration>>, GraphError> {
        Ok(Self::outgoing_calls(self, item))
    }

    fn node(&self, item: &Declaration) -> CallNode {
        CallNode::new(
            item.name(),
            SymbolKind::Function,
            item.uri().clone(),
            item.full_range(),
            item.name_range(),
        )
    }
}

/// Searches the body of `declaration` for each of `names`.
///
/// Matches are non-overlapping and scanned left to right. Names without a
/// match produce no record. A declaration whose tree has been replaced has no
/// text left to search.
fn find_calls(declaration: &Declaration, names: &[String]) -> Vec<CallRecord> {
    let Some(tree) = declaration.tree() else {
        trace!(name = declaration.name(), "declaration outlived its tree");
        return Vec::new();
    };
    let document = tree.document();
    let body_range = declaration.body_range();
    let body = document.text_in(body_range);
    let base = document.offset_at(body_range.start);

    names
        .iter()
        .filter_map(|name| {
            let sites: Vec<Location> = body
                .match_indices(name.as_str())
                .map(|(index, matched)| {
                    let start = document.position_at(base + index);
                    let end = document.position_at(base + index + matched.len());
                    Location::new(document.uri().clone(), Range::new(start, end))
                })
                .collect();
            (!sites.is_empty()).then(|| CallRecord {
                name: name.clone(),
                sites,
            })
        })
        .collect()
}
