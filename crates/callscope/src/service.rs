//! LSP-shaped call hierarchy service for the built-in `abc` language.

use std::sync::Arc;

use callscope_config::Config;
use callscope_graph::{CallGraph, CallGraphBuilder, DirectSearchEngine};
use callscope_host::SharedDocument;
use callscope_syntax::{Declaration, Parser, SyntaxIndex, document_symbols};
use lsp_types::{
    CallHierarchyIncomingCall, CallHierarchyItem, CallHierarchyOutgoingCall, DocumentSymbol,
    Position,
};
use tracing::{debug, trace};

use crate::convert;
use crate::error::ServiceError;

/// Call hierarchy service answering from a [`SyntaxIndex`].
///
/// Only documents whose language id matches the configured one are parsed;
/// everything else is ignored and yields `None`.
#[derive(Debug)]
pub struct CallScope {
    config: Config,
    index: Arc<SyntaxIndex>,
    engine: DirectSearchEngine,
}

impl CallScope {
    /// Builds a service with an empty index.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Config`] when the configuration is invalid and
    /// [`ServiceError::Syntax`] when no parser can be built for the keyword.
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        config.validate()?;
        let parser = Parser::new(&config.function_keyword)?;
        let index = Arc::new(SyntaxIndex::new(parser));
        debug!(
            language_id = config.language_id.as_str(),
            keyword = config.function_keyword.as_str(),
            "call hierarchy service ready"
        );
        Ok(Self {
            engine: DirectSearchEngine::new(Arc::clone(&index)),
            index,
            config,
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The shared syntax index.
    #[must_use]
    pub const fn index(&self) -> &Arc<SyntaxIndex> {
        &self.index
    }

    /// Parses a newly opened document.
    pub fn did_open(&self, document: &SharedDocument) {
        self.refresh(document);
    }

    /// Re-parses a document after an edit.
    pub fn did_change(&self, document: &SharedDocument) {
        self.refresh(document);
    }

    /// Flat outline of `document`.
    #[must_use]
    pub fn document_symbols(&self, document: &SharedDocument) -> Option<Vec<DocumentSymbol>> {
        self.accepts(document)
            .then(|| document_symbols(&self.index.ensure_tree(document)))
    }

    /// Item for the declaration named by the word under `position`.
    #[must_use]
    pub fn prepare_call_hierarchy(
        &self,
        document: &SharedDocument,
        position: Position,
    ) -> Option<CallHierarchyItem> {
        if !self.accepts(document) {
            return None;
        }
        self.engine
            .prepare(document, position)
            .map(|declaration| convert::declaration_item(&declaration))
    }

    /// Declaration an item refers to.
    ///
    /// An exact match on document and name range wins; otherwise the first
    /// declaration with the item's name is used. Items naming no known
    /// declaration come from elsewhere and resolve to `None`.
    #[must_use]
    pub fn resolve_item(&self, item: &CallHierarchyItem) -> Option<Declaration> {
        let exact = self.index.tree(&item.uri).and_then(|tree| {
            tree.declarations()
                .iter()
                .find(|declaration| {
                    declaration.name() == item.name
                        && declaration.name_range() == item.selection_range
                })
                .cloned()
        });
        exact.or_else(|| self.index.find_by_name(&item.name))
    }

    /// Callers of `item`, or `None` when the item cannot be resolved.
    #[must_use]
    pub fn incoming_calls(
        &self,
        item: &CallHierarchyItem,
    ) -> Option<Vec<CallHierarchyIncomingCall>> {
        let anchor = self.resolve_item(item)?;
        let calls = self
            .engine
            .incoming_calls(&anchor)
            .into_iter()
            .map(|call| convert::incoming(call, convert::declaration_item))
            .collect();
        Some(calls)
    }

    /// Callees of `item`, or `None` when the item cannot be resolved.
    #[must_use]
    pub fn outgoing_calls(
        &self,
        item: &CallHierarchyItem,
    ) -> Option<Vec<CallHierarchyOutgoingCall>> {
        let anchor = self.resolve_item(item)?;
        let calls = self
            .engine
            .outgoing_calls(&anchor)
            .into_iter()
            .map(|call| convert::outgoing(call, convert::declaration_item))
            .collect();
        Some(calls)
    }

    /// Call graph around the declaration under `position`, `depth` levels
    /// out in both directions.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Graph`] when no declaration is found at
    /// `position`.
    pub async fn call_graph(
        &self,
        document: &SharedDocument,
        position: Position,
        depth: u32,
    ) -> Result<CallGraph, ServiceError> {
        let builder = CallGraphBuilder::new(self.engine.clone());
        Ok(builder.build_graph(document, position, depth).await?)
    }

    fn accepts(&self, document: &SharedDocument) -> bool {
        document.language_id() == self.config.language_id
    }

    fn refresh(&self, document: &SharedDocument) {
        if self.accepts(document) {
            self.index.ensure_tree(document);
        } else {
            trace!(
                uri = document.uri().as_str(),
                language_id = document.language_id(),
                "ignoring document"
            );
        }
    }
}
