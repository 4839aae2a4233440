//! Persistence collaborators: where players and match records live.
//!
//! The core only ever sees a [`Snapshot`]; how it was produced is up to the store.

mod file;
mod ledger;
mod memory;

pub use file::JsonFileStore;
pub use ledger::{sanitize_name, Ledger};
pub use memory::MemoryStore;

use crate::models::{MatchRecord, Player, PlayerId, TournamentError};
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the storage layer itself (as opposed to rejected data).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path:?} is not a valid tournament file: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Players and matches read under one acquisition, so they agree with each other.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub matches: Vec<MatchRecord>,
}

impl From<&Ledger> for Snapshot {
    fn from(ledger: &Ledger) -> Self {
        Self {
            players: ledger.players().to_vec(),
            matches: ledger.matches().to_vec(),
        }
    }
}

/// Durable record of players and match outcomes.
pub trait Store {
    /// Sanitize and insert a player; the store assigns the id.
    fn register_player(&mut self, name: &str) -> Result<PlayerId, TournamentError>;

    /// Append a match outcome. Fails with `InvalidMatch` for a self-match or an unknown id.
    fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), TournamentError>;

    /// Players and the full match history, read consistently.
    fn snapshot(&self) -> Result<Snapshot, TournamentError>;

    /// Remove all match records.
    fn delete_matches(&mut self) -> Result<(), TournamentError>;

    /// Remove all players (and therefore all match records).
    fn delete_players(&mut self) -> Result<(), TournamentError>;

    fn players(&self) -> Result<Vec<Player>, TournamentError> {
        Ok(self.snapshot()?.players)
    }

    /// Full history; order carries no meaning.
    fn matches(&self) -> Result<Vec<MatchRecord>, TournamentError> {
        Ok(self.snapshot()?.matches)
    }

    fn count_players(&self) -> Result<usize, TournamentError> {
        Ok(self.players()?.len())
    }
}
