//! MatchRecord: one played match and its outcome.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// An immutable match outcome. There are no draws.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

impl MatchRecord {
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self { winner, loser }
    }

    /// Whether `player` took part in this match, on either side.
    pub fn involves(&self, player: PlayerId) -> bool {
        self.winner == player || self.loser == player
    }
}
