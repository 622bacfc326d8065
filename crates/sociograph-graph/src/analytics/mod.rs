//! Graph analytics algorithms.
//!
//! This module provides the influence-ranking surface of the engine:
//! degree centrality over the directed social graph.

mod degree;

pub use degree::{DegreeCentrality, DegreeCentralityResult, DegreeEntry};
