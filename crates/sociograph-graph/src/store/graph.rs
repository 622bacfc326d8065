//! The fixed-capacity social graph.
//!
//! `SocialGraph` stores an ordered arena of users plus a dense boolean
//! adjacency matrix sized `capacity * capacity` at construction. Node
//! identifiers are assigned densely in input order and double as matrix
//! indexes, so neighbor enumeration is naturally in ascending index
//! order - the property the traversal and analytics layers rely on for
//! deterministic results.

use sociograph_core::{NodeId, User, MAX_NAME_LEN};
use tracing::{debug, warn};

use super::error::{GraphError, GraphResult};

/// Default upper bound on the number of users in a graph.
pub const DEFAULT_CAPACITY: usize = 8;

/// Configuration for graph construction.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Maximum number of users the graph may hold.
    ///
    /// Default: [`DEFAULT_CAPACITY`]
    pub capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY }
    }
}

impl GraphConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of users the graph may hold.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// A fixed-capacity directed social graph.
///
/// The node set is fixed at construction; afterwards the graph is
/// mutated only by edge insertions and then treated as immutable by
/// every query. There are no deletion operations.
///
/// # Example
///
/// ```
/// use sociograph_core::NodeId;
/// use sociograph_graph::store::SocialGraph;
///
/// let mut graph = SocialGraph::new(["alice", "bob"])?;
/// graph.add_edge(NodeId::new(0), NodeId::new(1))?;
///
/// assert!(graph.has_edge(NodeId::new(0), NodeId::new(1)));
/// assert!(!graph.has_edge(NodeId::new(1), NodeId::new(0)));
/// # Ok::<(), sociograph_graph::store::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SocialGraph {
    /// Configured upper bound; also the row stride of `adjacency`.
    capacity: usize,
    /// Users in id order; `users[i].id == NodeId::new(i)`.
    users: Vec<User>,
    /// Row-major `capacity * capacity` edge matrix.
    adjacency: Vec<bool>,
    /// Number of distinct directed edges currently stored.
    edge_count: usize,
}

impl SocialGraph {
    /// Construct a graph with the default configuration.
    ///
    /// Node identifiers are assigned as `0..names.len()` in input order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CapacityExceeded`] if more names are supplied
    /// than the capacity allows, or [`GraphError::NameTooLong`] if any name
    /// exceeds [`MAX_NAME_LEN`] bytes. Nothing is partially constructed on
    /// failure.
    pub fn new<I, S>(names: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(GraphConfig::default(), names)
    }

    /// Construct a graph with an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`SocialGraph::new`].
    pub fn with_config<I, S>(config: GraphConfig, names: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() > config.capacity {
            warn!(
                requested = names.len(),
                capacity = config.capacity,
                "graph construction rejected: too many users"
            );
            return Err(GraphError::CapacityExceeded {
                requested: names.len(),
                capacity: config.capacity,
            });
        }

        for name in &names {
            if name.len() > MAX_NAME_LEN {
                return Err(GraphError::NameTooLong { name: name.clone(), max: MAX_NAME_LEN });
            }
        }

        let users: Vec<User> = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| User::new(NodeId::new(index), name))
            .collect();
        let adjacency = vec![false; config.capacity * config.capacity];

        debug!(users = users.len(), capacity = config.capacity, "graph initialized");

        Ok(Self { capacity: config.capacity, users, adjacency, edge_count: 0 })
    }

    /// Number of users in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.users.len()
    }

    /// Whether the graph holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// The configured upper bound on the number of users.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of distinct directed edges currently stored.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the given id names a node in this graph.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        node.as_usize() < self.users.len()
    }

    /// Look up a user by id.
    #[must_use]
    pub fn user(&self, node: NodeId) -> Option<&User> {
        self.users.get(node.as_usize())
    }

    /// All users, in id order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Iterate over all node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.users.len()).map(NodeId::new)
    }

    /// Insert a directed edge.
    ///
    /// Insertion is idempotent: edges have boolean semantics, so adding
    /// an edge that already exists has no additional effect.
    ///
    /// # Returns
    ///
    /// `true` if the edge was newly inserted, `false` if it was already
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidEdgeEndpoint`] if either endpoint is
    /// out of range; the graph is left unchanged.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> GraphResult<bool> {
        if !self.contains(source) || !self.contains(target) {
            warn!(%source, %target, node_count = self.node_count(), "edge rejected: endpoint out of range");
            return Err(GraphError::InvalidEdgeEndpoint {
                from: source,
                to: target,
                node_count: self.node_count(),
            });
        }

        let cell = self.cell(source, target);
        if self.adjacency[cell] {
            return Ok(false);
        }

        self.adjacency[cell] = true;
        self.edge_count += 1;
        Ok(true)
    }

    /// Whether the directed edge `source -> target` exists.
    ///
    /// # Panics
    ///
    /// Panics if either id was not issued by this graph. Callers are
    /// expected to only pass ids obtained from the construction step.
    #[must_use]
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        assert!(
            self.contains(source) && self.contains(target),
            "edge query with node id not issued by this graph"
        );
        self.adjacency[self.cell(source, target)]
    }

    /// Iterate over the targets of `node`'s outgoing edges, in ascending
    /// index order.
    ///
    /// # Panics
    ///
    /// Panics if `node` was not issued by this graph.
    pub fn out_neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        assert!(self.contains(node), "neighbor query with node id not issued by this graph");
        (0..self.users.len())
            .map(NodeId::new)
            .filter(move |&target| self.adjacency[self.cell(node, target)])
    }

    /// Iterate over the sources of `node`'s incoming edges, in ascending
    /// index order.
    ///
    /// # Panics
    ///
    /// Panics if `node` was not issued by this graph.
    pub fn in_neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        assert!(self.contains(node), "neighbor query with node id not issued by this graph");
        (0..self.users.len())
            .map(NodeId::new)
            .filter(move |&source| self.adjacency[self.cell(source, node)])
    }

    /// Count of edges originating from `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` was not issued by this graph.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_neighbors(node).count()
    }

    /// Count of edges terminating at `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` was not issued by this graph.
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.in_neighbors(node).count()
    }

    /// Flat index of the matrix cell for `source -> target`.
    fn cell(&self, source: NodeId, target: NodeId) -> usize {
        source.as_usize() * self.capacity + target.as_usize()
    }
}
