//! Fixed-capacity graph storage.
//!
//! This module provides the in-memory store for the social graph: an
//! ordered arena of users plus a dense boolean adjacency matrix over
//! their indexes.
//!
//! # Construction contract
//!
//! Construction is two-phase: the node set is fixed first (and may not
//! exceed the configured capacity), then directed edges are inserted.
//! Once edges are in place the graph is treated as immutable by all
//! analytics queries.

mod error;
mod graph;

pub use error::{GraphError, GraphResult};
pub use graph::{GraphConfig, SocialGraph, DEFAULT_CAPACITY};
