//! Degree Centrality implementation.
//!
//! Degree centrality is a simple influence measure based on the number
//! of connections a node has.
//!
//! # Formula
//!
//! For a node v:
//! - In-degree: number of edges terminating at v
//! - Out-degree: number of edges originating from v
//! - Total degree: in-degree + out-degree
//!
//! # Example
//!
//! ```
//! use sociograph_core::NodeId;
//! use sociograph_graph::analytics::DegreeCentrality;
//! use sociograph_graph::store::SocialGraph;
//!
//! let mut graph = SocialGraph::new(["alice", "bob"])?;
//! graph.add_edge(NodeId::new(0), NodeId::new(1))?;
//!
//! let result = DegreeCentrality::compute(&graph);
//! assert_eq!(result.most_influential, Some(NodeId::new(0)));
//! # Ok::<(), sociograph_graph::store::GraphError>(())
//! ```

use sociograph_core::NodeId;

use crate::store::SocialGraph;

/// Degree counts for a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeEntry {
    /// The node these counts belong to.
    pub node: NodeId,
    /// Count of edges terminating at the node.
    pub in_degree: usize,
    /// Count of edges originating from the node.
    pub out_degree: usize,
}

impl DegreeEntry {
    /// Create a new entry.
    #[must_use]
    pub const fn new(node: NodeId, in_degree: usize, out_degree: usize) -> Self {
        Self { node, in_degree, out_degree }
    }

    /// Total degree: in-degree plus out-degree.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.in_degree + self.out_degree
    }
}

/// Result of a Degree Centrality computation.
#[derive(Debug, Clone)]
pub struct DegreeCentralityResult {
    /// Per-node degree counts, in node index order.
    pub entries: Vec<DegreeEntry>,

    /// The node with the highest total degree.
    ///
    /// When several nodes share the maximum, the first one in index
    /// order wins. `None` only for an empty graph.
    pub most_influential: Option<NodeId>,
}

impl DegreeCentralityResult {
    /// Get the entry for a specific node.
    #[must_use]
    pub fn entry(&self, node: NodeId) -> Option<&DegreeEntry> {
        self.entries.get(node.as_usize())
    }

    /// Number of nodes covered by the result.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the result covers no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by total degree (descending).
    ///
    /// The sort is stable, so nodes with equal totals stay in index
    /// order - consistent with the first-max-wins tie-break.
    #[must_use]
    pub fn sorted(&self) -> Vec<&DegreeEntry> {
        let mut entries: Vec<&DegreeEntry> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.total().cmp(&a.total()));
        entries
    }

    /// The top N entries by total degree.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<&DegreeEntry> {
        self.sorted().into_iter().take(n).collect()
    }
}

/// Degree Centrality algorithm implementation.
///
/// Measures importance as the number of direct connections a node has,
/// counting both directions. Simple, but an effective influence proxy
/// for small social graphs.
pub struct DegreeCentrality;

impl DegreeCentrality {
    /// Compute degree centrality for all nodes in the graph.
    ///
    /// Entries are reported in node index order. The most-influential
    /// node is the first one in index order achieving the maximum total
    /// degree (strict `>` against the running maximum), which keeps the
    /// ranking deterministic when totals tie.
    #[must_use]
    pub fn compute(graph: &SocialGraph) -> DegreeCentralityResult {
        let mut entries = Vec::with_capacity(graph.node_count());
        let mut most_influential: Option<NodeId> = None;
        let mut max_total = 0;

        for node in graph.node_ids() {
            let entry = DegreeEntry::new(node, graph.in_degree(node), graph.out_degree(node));

            if most_influential.is_none() || entry.total() > max_total {
                most_influential = Some(node);
                max_total = entry.total();
            }

            entries.push(entry);
        }

        DegreeCentralityResult { entries, most_influential }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_total() {
        let entry = DegreeEntry::new(NodeId::new(0), 2, 3);
        assert_eq!(entry.total(), 5);
    }

    #[test]
    fn result_empty() {
        let result = DegreeCentralityResult { entries: Vec::new(), most_influential: None };

        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert!(result.entry(NodeId::new(0)).is_none());
        assert!(result.sorted().is_empty());
        assert!(result.top_n(10).is_empty());
    }

    #[test]
    fn result_sorted_is_stable_on_ties() {
        let entries = vec![
            DegreeEntry::new(NodeId::new(0), 1, 1),
            DegreeEntry::new(NodeId::new(1), 2, 1),
            DegreeEntry::new(NodeId::new(2), 1, 1),
        ];
        let result =
            DegreeCentralityResult { entries, most_influential: Some(NodeId::new(1)) };

        let sorted = result.sorted();
        assert_eq!(sorted[0].node, NodeId::new(1)); // highest
        assert_eq!(sorted[1].node, NodeId::new(0)); // tie, lower index first
        assert_eq!(sorted[2].node, NodeId::new(2));
    }

    #[test]
    fn result_top_n() {
        let entries = vec![
            DegreeEntry::new(NodeId::new(0), 0, 1),
            DegreeEntry::new(NodeId::new(1), 3, 1),
        ];
        let result =
            DegreeCentralityResult { entries, most_influential: Some(NodeId::new(1)) };

        let top = result.top_n(1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].node, NodeId::new(1));
    }
}
