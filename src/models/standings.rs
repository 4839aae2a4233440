//! StandingsRow and Pairing: derived, never persisted.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One player's line in the standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    /// Matches played, won or lost.
    pub matches: u32,
}

impl StandingsRow {
    /// A fresh row with no matches played.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            matches: 0,
        }
    }

    pub fn losses(&self) -> u32 {
        self.matches.saturating_sub(self.wins)
    }
}

/// Two players meeting in the next round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub id_1: PlayerId,
    pub name_1: String,
    pub id_2: PlayerId,
    pub name_2: String,
}

impl Pairing {
    pub fn new(first: &StandingsRow, second: &StandingsRow) -> Self {
        Self {
            id_1: first.id,
            name_1: first.name.clone(),
            id_2: second.id,
            name_2: second.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn losses_are_matches_not_won() {
        let row = StandingsRow {
            id: 1,
            name: "Ada".into(),
            wins: 2,
            matches: 5,
        };
        assert_eq!(row.losses(), 3);
    }

    #[test]
    fn losses_never_underflow() {
        let row = StandingsRow {
            id: 1,
            name: "Ada".into(),
            wins: 3,
            matches: 1,
        };
        assert_eq!(row.losses(), 0);
    }
}
