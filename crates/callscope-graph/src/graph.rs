//! Call graph structure with bidirectional indexing.

use std::collections::HashMap;

use crate::edge::CallEdge;
use crate::error::GraphError;
use crate::node::{CallNode, NodeId};

/// A call graph indexed in both directions.
///
/// Edges are unique per caller, callee and source; adding a duplicate merges
/// its call sites into the existing edge. Per-node edge lists keep insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct CallGraph {
    nodes: HashMap<NodeId, CallNode>,
    edges: Vec<CallEdge>,
    /// Incoming edge indices per callee.
    callers_index: HashMap<NodeId, Vec<usize>>,
    /// Outgoing edge indices per caller.
    callees_index: HashMap<NodeId, Vec<usize>>,
}

impl CallGraph {
    /// Creates a new empty call graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the graph.
    ///
    /// If a node with the same ID already exists, it is replaced.
    pub fn add_node(&mut self, node: CallNode) {
        let id = node.id().clone();
        self.nodes.insert(id.clone(), node);
        self.callers_index.entry(id.clone()).or_default();
        self.callees_index.entry(id).or_default();
    }

    /// Adds an edge to the graph, merging it into an existing one when both
    /// connect the same nodes with the same source.
    pub fn add_edge(&mut self, edge: CallEdge) {
        let existing = self
            .callees_index
            .get(edge.caller())
            .into_iter()
            .flatten()
            .copied()
            .find(|&index| {
                self.edges
                    .get(index)
                    .is_some_and(|candidate| candidate.connects_same(&edge))
            });

        if let Some(current) = existing.and_then(|index| self.edges.get_mut(index)) {
            current.absorb(edge);
            return;
        }

        let edge_index = self.edges.len();
        let from_id = edge.caller().clone();
        let to_id = edge.callee().clone();
        self.edges.push(edge);
        self.callees_index
            .entry(from_id)
            .or_default()
            .push(edge_index);
        self.callers_index.entry(to_id).or_default().push(edge_index);
    }

    /// Returns the node with the given ID.
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&CallNode> {
        self.nodes.get(id)
    }

    /// Returns an iterator over all nodes in the graph.
    pub fn nodes(&self) -> impl Iterator<Item = &CallNode> {
        self.nodes.values()
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns an iterator over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &CallEdge> {
        self.edges.iter()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges where the given node is the callee.
    pub fn incoming_edges(&self, node_id: &NodeId) -> impl Iterator<Item = &CallEdge> {
        self.callers_index
            .get(node_id)
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.edges.get(idx))
    }

    /// Returns the edges where the given node is the caller.
    pub fn outgoing_edges(&self, node_id: &NodeId) -> impl Iterator<Item = &CallEdge> {
        self.callees_index
            .get(node_id)
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.edges.get(idx))
    }

    /// Returns the nodes that call the given node.
    pub fn callers_of(&self, node_id: &NodeId) -> impl Iterator<Item = &CallNode> {
        self.incoming_edges(node_id)
            .filter_map(|edge| self.nodes.get(edge.caller()))
    }

    /// Returns the nodes that are called by the given node.
    pub fn callees_of(&self, node_id: &NodeId) -> impl Iterator<Item = &CallNode> {
        self.outgoing_edges(node_id)
            .filter_map(|edge| self.nodes.get(edge.callee()))
    }

    /// Returns whether the graph contains a node with the given ID.
    #[must_use]
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Returns whether the graph is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finds a node by its simple or qualified name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CallNode> {
        self.nodes
            .values()
            .find(|node| node.name() == name || node.qualified_name() == name)
    }

    /// Returns the node with the given ID, or an error if not found.
    ///
    /// # Errors
    /// Returns `GraphError::NodeNotFound` if no node with the given ID exists.
    pub fn get_node(&self, id: &NodeId) -> Result<&CallNode, GraphError> {
        self.node(id)
            .ok_or_else(|| GraphError::node_not_found(id.as_str()))
    }
}
