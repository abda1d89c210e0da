//! LSP-shaped call hierarchy service backed by a navigation host.

use callscope_graph::{CallGraph, CallGraphBuilder, DelegatedEngine};
use callscope_host::{NavigationHost, SharedDocument};
use lsp_types::{
    CallHierarchyIncomingCall, CallHierarchyItem, CallHierarchyOutgoingCall, Position, Uri,
};

use crate::convert;
use crate::error::ServiceError;

/// Call hierarchy service for languages the host already understands.
///
/// Items are rebuilt from their name, kind and ranges on every request, so
/// items produced elsewhere work as long as they match a host outline entry.
#[derive(Debug, Clone)]
pub struct ReferenceCallScope<H> {
    engine: DelegatedEngine<H>,
}

impl<H> ReferenceCallScope<H> {
    /// Wraps `host`.
    #[must_use]
    pub const fn new(host: H) -> Self {
        Self {
            engine: DelegatedEngine::new(host),
        }
    }

    /// The underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &DelegatedEngine<H> {
        &self.engine
    }

    /// Always empty; callees are not derived from references.
    #[must_use]
    pub fn outgoing_calls(&self, item: &CallHierarchyItem) -> Vec<CallHierarchyOutgoingCall> {
        self.engine
            .outgoing_calls(&convert::item_symbol(item))
            .into_iter()
            .map(|call| convert::outgoing(call, convert::symbol_item))
            .collect()
    }
}

impl<H: NavigationHost> ReferenceCallScope<H> {
    /// Item for the symbol defined at the first definition of the word under
    /// `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Graph`] when a host query fails.
    pub async fn prepare_call_hierarchy(
        &self,
        uri: &Uri,
        position: Position,
    ) -> Result<Option<CallHierarchyItem>, ServiceError> {
        let symbol = self.engine.prepare(uri, position).await?;
        Ok(symbol.map(|resolved| convert::symbol_item(&resolved)))
    }

    /// Callers of `item`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Graph`] when a host query fails.
    pub async fn incoming_calls(
        &self,
        item: &CallHierarchyItem,
    ) -> Result<Vec<CallHierarchyIncomingCall>, ServiceError> {
        let calls = self
            .engine
            .incoming_calls(&convert::item_symbol(item))
            .await?;
        Ok(calls
            .into_iter()
            .map(|call| convert::incoming(call, convert::symbol_item))
            .collect())
    }

    /// Graph of the callers of the symbol under `position`, `depth` levels
    /// deep.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Graph`] when the symbol cannot be resolved or
    /// a host query fails.
    pub async fn callers_graph(
        &self,
        document: &SharedDocument,
        position: Position,
        depth: u32,
    ) -> Result<CallGraph, ServiceError> {
        let builder = CallGraphBuilder::new(DelegatedEngine::new(self.engine.host()));
        Ok(builder.callers_graph(document, position, depth).await?)
    }
}
