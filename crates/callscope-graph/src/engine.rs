//! The engine abstraction shared by both call hierarchy strategies.

use std::future::Future;

use callscope_host::SharedDocument;
use lsp_types::{Location, Position};

use crate::edge::EdgeSource;
use crate::error::GraphError;
use crate::node::CallNode;

/// A caller of some anchor together with where it makes the calls.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingCall<T> {
    /// The calling symbol.
    pub from: T,
    /// Call sites inside `from`, in discovery order.
    pub sites: Vec<Location>,
}

/// A callee of some anchor together with where the anchor calls it.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingCall<T> {
    /// The called symbol.
    pub to: T,
    /// Call sites inside the anchor, in discovery order.
    pub sites: Vec<Location>,
}

/// A strategy that resolves anchors and derives their calls.
///
/// `Item` is the engine's own symbol handle. Engines report missing data as
/// `None` or an empty list and reserve errors for failing host queries.
pub trait CallHierarchyEngine {
    /// Symbol handle produced and consumed by this engine.
    type Item: Clone;

    /// Provenance recorded on graph edges built from this engine.
    const SOURCE: EdgeSource;

    /// Resolves the symbol addressed by `position` in `document`.
    ///
    /// # Errors
    /// Returns an error when a host query fails.
    fn prepare(
        &self,
        document: &SharedDocument,
        position: Position,
    ) -> impl Future<Output = Result<Option<Self::Item>, GraphError>>;

    /// Lists the callers of `item`.
    ///
    /// # Errors
    /// Returns an error when a host query fails.
    fn incoming_calls(
        &self,
        item: &Self::Item,
    ) -> impl Future<Output = Result<Vec<IncomingCall<Self::Item>>, GraphError>>;

    /// Lists the callees of `item`.
    ///
    /// # Errors
    /// Returns an error when a host query fails.
    fn outgoing_calls(
        &self,
        item: &Self::Item,
    ) -> impl Future<Output = Result<Vec<OutgoingCall<Self::Item>>, GraphError>>;

    /// Describes `item` as a graph node.
    fn node(&self, item: &Self::Item) -> CallNode;
}
