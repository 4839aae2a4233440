//! Player data structure.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned by the store at registration.
pub type PlayerId = u32;

/// A registered player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Display name, already sanitized by the store.
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
