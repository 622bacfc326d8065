//! Unique identifiers for nodes in the graph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a node (user) in the graph.
///
/// Identifiers are dense: a graph with `n` nodes uses exactly the ids
/// `0..n`, assigned in construction order. They are stable for the
/// lifetime of the graph and double as indexes into its adjacency
/// storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Create a new `NodeId` from a raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_roundtrip() {
        let id = NodeId::new(42);
        assert_eq!(id.as_usize(), 42);
    }

    #[test]
    fn ids_are_ordered() {
        let a = NodeId::new(1);
        let b = NodeId::new(2);
        assert!(a < b);
    }

    #[test]
    fn display_is_raw_index() {
        assert_eq!(NodeId::new(7).to_string(), "7");
    }
}
