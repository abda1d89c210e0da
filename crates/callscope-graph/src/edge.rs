//! Call graph edge representation.

use std::fmt;

use lsp_types::Location;

use crate::node::NodeId;

/// Provenance of a call edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSource {
    /// Found by searching function bodies for known names.
    DirectSearch,
    /// Found by mapping host references to enclosing symbols.
    References,
}

impl fmt::Display for EdgeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::DirectSearch => "direct",
            Self::References => "references",
        };
        f.write_str(label)
    }
}

/// A directed caller-to-callee edge.
///
/// An edge collects every call site between the same pair of nodes, each one
/// a location inside the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallEdge {
    caller: NodeId,
    callee: NodeId,
    source: EdgeSource,
    call_sites: Vec<Location>,
}

impl CallEdge {
    /// Creates a new call edge with no call sites.
    #[must_use]
    pub const fn new(from_caller: NodeId, to_callee: NodeId, source: EdgeSource) -> Self {
        Self {
            caller: from_caller,
            callee: to_callee,
            source,
            call_sites: Vec::new(),
        }
    }

    /// Sets the call sites.
    #[must_use]
    pub fn with_call_sites(mut self, sites: Vec<Location>) -> Self {
        self.call_sites = sites;
        self
    }

    /// Returns the caller node ID.
    #[must_use]
    pub const fn caller(&self) -> &NodeId {
        &self.caller
    }

    /// Returns the callee node ID.
    #[must_use]
    pub const fn callee(&self) -> &NodeId {
        &self.callee
    }

    /// Returns how this edge was discovered.
    #[must_use]
    pub const fn source(&self) -> EdgeSource {
        self.source
    }

    /// Returns the call sites in discovery order.
    #[must_use]
    pub fn call_sites(&self) -> &[Location] {
        &self.call_sites
    }

    /// Whether `other` connects the same nodes with the same provenance.
    #[must_use]
    pub fn connects_same(&self, other: &Self) -> bool {
        self.caller == other.caller && self.callee == other.callee && self.source == other.source
    }

    /// Appends the call sites of `other` that this edge does not list yet.
    pub(crate) fn absorb(&mut self, other: Self) {
        for site in other.call_sites {
            if !self.call_sites.contains(&site) {
                self.call_sites.push(site);
            }
        }
    }
}
