//! User (node) types for the social graph.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Maximum length of a user's display name, in bytes.
pub const MAX_NAME_LEN: usize = 64;

/// A user (node) in the social graph.
///
/// Users carry a dense identifier assigned by the graph at construction
/// time and a display name bounded to [`MAX_NAME_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user.
    pub id: NodeId,
    /// Display name for this user.
    pub name: String,
}

impl User {
    /// Create a new user with the given id and display name.
    #[must_use]
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}
