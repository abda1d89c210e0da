//! Call graph construction over a [`CallHierarchyEngine`].

use std::collections::HashSet;

use callscope_host::SharedDocument;
use lsp_types::Position;
use tracing::debug;

use crate::edge::CallEdge;
use crate::engine::CallHierarchyEngine;
use crate::error::GraphError;
use crate::graph::CallGraph;
use crate::node::NodeId;
use crate::uri::uri_to_path;

/// Expands a [`CallGraph`] around an anchor, level by level.
///
/// Depth counts call levels away from the anchor: 0 yields the anchor alone
/// and 1 adds its direct callers or callees. Every symbol is expanded at most
/// once per direction, so recursion and cycles terminate.
#[derive(Debug, Clone)]
pub struct CallGraphBuilder<E> {
    engine: E,
}

impl<E> CallGraphBuilder<E> {
    /// Creates a builder that queries `engine`.
    #[must_use]
    pub const fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Returns the underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: CallHierarchyEngine> CallGraphBuilder<E> {
    /// Builds a graph of both callers and callees of the symbol at
    /// `position`.
    ///
    /// # Errors
    /// Returns `GraphError::SymbolNotFound` if no symbol resolves at
    /// `position`, or the engine's error if a query fails.
    pub async fn build_graph(
        &self,
        document: &SharedDocument,
        position: Position,
        depth: u32,
    ) -> Result<CallGraph, GraphError> {
        let (mut graph, anchor) = self.seed(document, position).await?;
        self.explore_callers(&mut graph, &anchor, depth).await?;
        self.explore_callees(&mut graph, &anchor, depth).await?;
        Ok(graph)
    }

    /// Builds a graph of the callers of the symbol at `position`.
    ///
    /// # Errors
    /// Returns `GraphError::SymbolNotFound` if no symbol resolves at
    /// `position`, or the engine's error if a query fails.
    pub async fn callers_graph(
        &self,
        document: &SharedDocument,
        position: Position,
        depth: u32,
    ) -> Result<CallGraph, GraphError> {
        let (mut graph, anchor) = self.seed(document, position).await?;
        self.explore_callers(&mut graph, &anchor, depth).await?;
        Ok(graph)
    }

    /// Builds a graph of the callees of the symbol at `position`.
    ///
    /// # Errors
    /// Returns `GraphError::SymbolNotFound` if no symbol resolves at
    /// `position`, or the engine's error if a query fails.
    pub async fn callees_graph(
        &self,
        document: &SharedDocument,
        position: Position,
        depth: u32,
    ) -> Result<CallGraph, GraphError> {
        let (mut graph, anchor) = self.seed(document, position).await?;
        self.explore_callees(&mut graph, &anchor, depth).await?;
        Ok(graph)
    }

    async fn seed(
        &self,
        document: &SharedDocument,
        position: Position,
    ) -> Result<(CallGraph, E::Item), GraphError> {
        let anchor = self
            .engine
            .prepare(document, position)
            .await?
            .ok_or_else(|| {
                GraphError::symbol_not_found(
                    uri_to_path(document.uri()),
                    position.line,
                    position.character,
                )
            })?;
        let mut graph = CallGraph::new();
        graph.add_node(self.engine.node(&anchor));
        Ok((graph, anchor))
    }

    async fn explore_callers(
        &self,
        graph: &mut CallGraph,
        anchor: &E::Item,
        depth: u32,
    ) -> Result<(), GraphError> {
        let mut frontier = vec![anchor.clone()];
        let mut expanded: HashSet<NodeId> = HashSet::new();

        for level in 0..depth {
            let mut next = Vec::new();
            for item in frontier {
                let target_id = self.engine.node(&item).id().clone();
                if !expanded.insert(target_id.clone()) {
                    continue;
                }
                for call in self.engine.incoming_calls(&item).await? {
                    let from_node = self.engine.node(&call.from);
                    let from_id = from_node.id().clone();
                    if !graph.contains_node(&from_id) {
                        graph.add_node(from_node);
                    }
                    graph.add_edge(
                        CallEdge::new(from_id, target_id.clone(), E::SOURCE)
                            .with_call_sites(call.sites),
                    );
                    next.push(call.from);
                }
            }
            debug!(level, discovered = next.len(), "expanded callers");
            frontier = next;
        }
        Ok(())
    }

    async fn explore_callees(
        &self,
        graph: &mut CallGraph,
        anchor: &E::Item,
        depth: u32,
    ) -> Result<(), GraphError> {
        let mut frontier = vec![anchor.clone()];
        let mut expanded: HashSet<NodeId> = HashSet::new();

        for level in 0..depth {
            let mut next = Vec::new();
            for item in frontier {
                let source_id = self.engine.node(&item).id().clone();
                if !expanded.insert(source_id.clone()) {
                    continue;
                }
                for call in self.engine.outgoing_calls(&item).await? {
                    let target_node = self.engine.node(&call.to);
                    let target_id = target_node.id().clone();
                    if !graph.contains_node(&target_id) {
                        graph.add_node(target_node);
                    }
                    graph.add_edge(
                        CallEdge::new(source_id.clone(), target_id, E::SOURCE)
                            .with_call_sites(call.sites),
                    );
                    next.push(call.to);
                }
            }
            debug!(level, discovered = next.len(), "expanded callees");
            frontier = next;
        }
        Ok(())
    }
}
