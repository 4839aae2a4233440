//! Tournament: the operations a caller (CLI, service layer) uses, on top of any [`Store`].

use crate::logic::{compute_pairings, compute_standings};
use crate::models::{Pairing, PlayerId, StandingsRow, TournamentError};
use crate::store::Store;

/// A Swiss-system tournament backed by `S`.
///
/// Holds no state of its own besides the store: standings and pairings are recomputed from a
/// fresh snapshot on every call.
#[derive(Clone, Debug, Default)]
pub struct Tournament<S> {
    store: S,
}

impl<S: Store> Tournament<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a player; the store sanitizes the name and assigns the id.
    pub fn register_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        self.store.register_player(name)
    }

    pub fn count_players(&self) -> Result<usize, TournamentError> {
        self.store.count_players()
    }

    /// Ranked standings: wins descending, ties by ascending id.
    pub fn player_standings(&self) -> Result<Vec<StandingsRow>, TournamentError> {
        let snapshot = self.store.snapshot()?;
        Ok(compute_standings(&snapshot.players, &snapshot.matches)?)
    }

    /// Record that `winner` beat `loser`.
    pub fn report_match(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<(), TournamentError> {
        self.store.record_match(winner, loser)
    }

    /// Pairings for the next round. Requires an even number of registered players.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>, TournamentError> {
        let standings = self.player_standings()?;
        compute_pairings(&standings)
    }

    /// Remove every player (and with them the match history).
    pub fn delete_players(&mut self) -> Result<(), TournamentError> {
        self.store.delete_players()
    }

    pub fn delete_matches(&mut self) -> Result<(), TournamentError> {
        self.store.delete_matches()
    }
}
