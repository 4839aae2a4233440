//! In-memory store.

use crate::models::{PlayerId, TournamentError};
use crate::store::{Ledger, Snapshot, Store};

/// Keeps the ledger in process memory; nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    ledger: Ledger,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn register_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        self.ledger.register_player(name)
    }

    fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), TournamentError> {
        Ok(self.ledger.record_match(winner, loser)?)
    }

    fn snapshot(&self) -> Result<Snapshot, TournamentError> {
        Ok(Snapshot::from(&self.ledger))
    }

    fn delete_matches(&mut self) -> Result<(), TournamentError> {
        self.ledger.clear_matches();
        Ok(())
    }

    fn delete_players(&mut self) -> Result<(), TournamentError> {
        self.ledger.clear_players();
        Ok(())
    }

    fn count_players(&self) -> Result<usize, TournamentError> {
        Ok(self.ledger.players().len())
    }
}
