//! Shortest path finding.
//!
//! This module provides the BFS-based degrees-of-separation query:
//! the shortest unweighted path between two users, reconstructed as the
//! full node sequence from source to target.

// Allow expect - the invariant is guaranteed by the data structure
#![allow(clippy::expect_used)]

use std::collections::VecDeque;

use sociograph_core::NodeId;

use super::{neighbors, Direction};
use crate::store::{GraphError, GraphResult, SocialGraph};

/// A path through the graph.
///
/// Represents the node sequence of a shortest path, from source to
/// target inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// The nodes in the path, from source to target.
    pub nodes: Vec<NodeId>,
    /// The total length of the path (number of edges).
    /// Always `nodes.len() - 1`.
    pub distance: usize,
}

impl Path {
    /// Create a new path from a node sequence.
    fn new(nodes: Vec<NodeId>) -> Self {
        let distance = nodes.len().saturating_sub(1);
        Self { nodes, distance }
    }

    /// Get the source node.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    /// Get the target node.
    #[must_use]
    pub fn target(&self) -> NodeId {
        *self.nodes.last().expect("path has at least one node")
    }
}

/// Outcome of a shortest path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// Source and target are the same node; the zero-length result.
    SameNode(NodeId),
    /// A shortest path exists; distance is at least 1.
    Found(Path),
    /// The target is unreachable from the source.
    NotFound,
}

impl PathResult {
    /// Whether a non-trivial path was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path, if one was found.
    #[must_use]
    pub const fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    /// The degrees of separation, if the target is reachable.
    ///
    /// [`PathResult::SameNode`] counts as distance zero.
    #[must_use]
    pub fn distance(&self) -> Option<usize> {
        match self {
            Self::SameNode(_) => Some(0),
            Self::Found(path) => Some(path.distance),
            Self::NotFound => None,
        }
    }
}

/// BFS-based shortest path finder.
///
/// Finds the shortest unweighted path between two users with a classic
/// breadth-first search: a FIFO frontier seeded with the source, dense
/// distance and predecessor maps, neighbors expanded in ascending index
/// order. Among multiple shortest paths the one found by always
/// expanding the lowest-indexed unvisited neighbor first is returned,
/// so results are deterministic and reproducible.
///
/// # Example
///
/// ```
/// use sociograph_core::NodeId;
/// use sociograph_graph::store::SocialGraph;
/// use sociograph_graph::traversal::{PathResult, ShortestPath};
///
/// let mut graph = SocialGraph::new(["alice", "bob", "carol"])?;
/// graph.add_edge(NodeId::new(0), NodeId::new(1))?;
/// graph.add_edge(NodeId::new(1), NodeId::new(2))?;
///
/// let result = ShortestPath::find_path(&graph, NodeId::new(0), NodeId::new(2))?;
/// let path = result.path().expect("reachable");
/// assert_eq!(path.distance, 2);
/// # Ok::<(), sociograph_graph::store::GraphError>(())
/// ```
pub struct ShortestPath {
    /// Source node.
    source: NodeId,
    /// Target node.
    target: NodeId,
    /// Traversal direction.
    direction: Direction,
    /// Maximum path length to search.
    max_depth: Option<usize>,
}

impl ShortestPath {
    /// Create a new shortest path finder following outgoing edges.
    #[must_use]
    pub const fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target, direction: Direction::Outgoing, max_depth: None }
    }

    /// Set the direction to traverse.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the maximum path length to search.
    ///
    /// If no path of this length or shorter exists, the query reports
    /// [`PathResult::NotFound`].
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Find the shortest path.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is not a
    /// node of `graph`.
    pub fn find(self, graph: &SocialGraph) -> GraphResult<PathResult> {
        self.check_endpoints(graph)?;

        if self.source == self.target {
            return Ok(PathResult::SameNode(self.source));
        }

        let n = graph.node_count();
        let mut distance: Vec<Option<usize>> = vec![None; n];
        let mut predecessor: Vec<Option<NodeId>> = vec![None; n];
        let mut frontier: VecDeque<(NodeId, usize)> = VecDeque::new();

        distance[self.source.as_usize()] = Some(0);
        frontier.push_back((self.source, 0));

        while let Some((current, depth)) = frontier.pop_front() {
            if current == self.target {
                return Ok(PathResult::Found(self.reconstruct(&predecessor)));
            }

            if let Some(max) = self.max_depth {
                if depth >= max {
                    continue;
                }
            }

            for neighbor in neighbors(graph, current, self.direction) {
                let slot = neighbor.as_usize();
                if distance[slot].is_some() {
                    continue;
                }

                distance[slot] = Some(depth + 1);
                predecessor[slot] = Some(current);
                frontier.push_back((neighbor, depth + 1));
            }
        }

        Ok(PathResult::NotFound)
    }

    /// Check if any path exists between the two nodes.
    ///
    /// Cheaper than [`ShortestPath::find`] when the path itself is not
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is not a
    /// node of `graph`.
    pub fn exists(self, graph: &SocialGraph) -> GraphResult<bool> {
        Ok(self.distance(graph)?.is_some())
    }

    /// Find the distance between the two nodes (path length).
    ///
    /// Cheaper than [`ShortestPath::find`] when only the degrees of
    /// separation are needed; skips predecessor bookkeeping and path
    /// reconstruction.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is not a
    /// node of `graph`.
    pub fn distance(self, graph: &SocialGraph) -> GraphResult<Option<usize>> {
        self.check_endpoints(graph)?;

        if self.source == self.target {
            return Ok(Some(0));
        }

        let n = graph.node_count();
        let mut visited = vec![false; n];
        let mut frontier: VecDeque<(NodeId, usize)> = VecDeque::new();

        visited[self.source.as_usize()] = true;
        frontier.push_back((self.source, 0));

        while let Some((current, depth)) = frontier.pop_front() {
            if let Some(max) = self.max_depth {
                if depth >= max {
                    continue;
                }
            }

            for neighbor in neighbors(graph, current, self.direction) {
                if neighbor == self.target {
                    return Ok(Some(depth + 1));
                }

                let slot = neighbor.as_usize();
                if visited[slot] {
                    continue;
                }

                visited[slot] = true;
                frontier.push_back((neighbor, depth + 1));
            }
        }

        Ok(None)
    }

    /// Convenience method: find the shortest path along outgoing edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is not a
    /// node of `graph`.
    pub fn find_path(
        graph: &SocialGraph,
        source: NodeId,
        target: NodeId,
    ) -> GraphResult<PathResult> {
        Self::new(source, target).find(graph)
    }

    fn check_endpoints(&self, graph: &SocialGraph) -> GraphResult<()> {
        if !graph.contains(self.source) {
            return Err(GraphError::NodeNotFound(self.source));
        }
        if !graph.contains(self.target) {
            return Err(GraphError::NodeNotFound(self.target));
        }
        Ok(())
    }

    /// Reconstruct the path by walking predecessor links backward from
    /// the target, then reversing into source -> target order.
    fn reconstruct(&self, predecessor: &[Option<NodeId>]) -> Path {
        let mut nodes = vec![self.target];
        let mut current = self.target;

        while let Some(previous) = predecessor[current.as_usize()] {
            nodes.push(previous);
            current = previous;
        }

        nodes.reverse();
        Path::new(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_accessors() {
        let path = Path::new(vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
        assert_eq!(path.source(), NodeId::new(1));
        assert_eq!(path.target(), NodeId::new(3));
        assert_eq!(path.distance, 2);
    }

    #[test]
    fn path_result_distance() {
        assert_eq!(PathResult::SameNode(NodeId::new(1)).distance(), Some(0));
        assert_eq!(PathResult::NotFound.distance(), None);

        let found = PathResult::Found(Path::new(vec![NodeId::new(0), NodeId::new(1)]));
        assert_eq!(found.distance(), Some(1));
        assert!(found.is_found());
        assert!(found.path().is_some());
    }

    #[test]
    fn shortest_path_builder() {
        let sp = ShortestPath::new(NodeId::new(1), NodeId::new(5))
            .with_direction(Direction::Both)
            .with_max_depth(4);

        assert_eq!(sp.source, NodeId::new(1));
        assert_eq!(sp.target, NodeId::new(5));
        assert_eq!(sp.direction, Direction::Both);
        assert_eq!(sp.max_depth, Some(4));
    }

    #[test]
    fn shortest_path_default_values() {
        let sp = ShortestPath::new(NodeId::new(0), NodeId::new(1));

        assert_eq!(sp.direction, Direction::Outgoing);
        assert!(sp.max_depth.is_none());
    }
}
