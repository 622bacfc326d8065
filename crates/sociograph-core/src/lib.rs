//! `sociograph` Core
//!
//! This crate provides the fundamental types shared across the `sociograph`
//! social-graph analytics engine.
//!
//! # Modules
//!
//! - [`types`] - Core data types (`User`, `NodeId`)

pub mod types;

// Re-export commonly used types
pub use types::{NodeId, User, MAX_NAME_LEN};
