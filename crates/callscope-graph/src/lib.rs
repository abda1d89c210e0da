//! Call hierarchy derivation for callscope.
//!
//! Two engines answer "who calls whom" for an anchor symbol:
//!
//! - [`DirectSearchEngine`] works on the `abc` syntax index. Outgoing calls
//!   are the known function names found inside the anchor's body; incoming
//!   calls are the functions whose bodies mention the anchor's name. Matching
//!   is plain substring search, so names inside longer identifiers, comments
//!   or strings count as calls.
//! - [`DelegatedEngine`] works for any language the host already supports.
//!   It resolves the anchor through go-to-definition, collects references,
//!   maps each reference to its enclosing outline symbol and merges adjacent
//!   references from the same symbol into one call. It only answers incoming
//!   calls.
//!
//! Both implement [`CallHierarchyEngine`], which [`CallGraphBuilder`] uses to
//! expand a [`CallGraph`] around an anchor up to a given depth.
//!
//! # Example
//!
//! ```ignore
//! use callscope_graph::{CallGraphBuilder, DirectSearchEngine};
//!
//! let engine = DirectSearchEngine::new(index);
//! let graph = CallGraphBuilder::new(engine)
//!     .callers_graph(&document, position, 2)
//!     .await?;
//! for caller in graph.callers_of(&node_id) {
//!     // Process caller
//! }
//! ```

mod delegated;
mod direct;
mod edge;
mod engine;
mod error;
mod graph;
mod node;
mod provider;
mod uri;

pub use delegated::{DelegatedEngine, ResolvedSymbol};
pub use direct::DirectSearchEngine;
pub use edge::{CallEdge, EdgeSource};
pub use engine::{CallHierarchyEngine, IncomingCall, OutgoingCall};
pub use error::GraphError;
pub use graph::CallGraph;
pub use node::{CallNode, NodeId, SymbolKind};
pub use provider::CallGraphBuilder;
pub use uri::uri_to_path;

#[cfg(test)]
mod tests;
