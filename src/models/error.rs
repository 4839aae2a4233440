//! Errors raised by tournament operations.

use crate::models::player::PlayerId;
use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur during tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Match history or standings disagree with the registered players.
    #[error("data integrity violation: {0}")]
    DataIntegrity(#[from] IntegrityViolation),

    /// A match report that cannot be recorded.
    #[error("invalid match: {0}")]
    InvalidMatch(#[from] InvalidMatch),

    /// Pairing requested with an odd number of players.
    #[error("cannot pair an odd number of players ({count})")]
    OddPlayerCount { count: usize },

    /// Name was empty once trimmed.
    #[error("player name must not be empty")]
    EmptyPlayerName,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Ways a snapshot of players and matches can be inconsistent.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum IntegrityViolation {
    #[error("match references unknown player {player_id}")]
    UnknownPlayer { player_id: PlayerId },
    #[error("player {player_id} appears more than once")]
    DuplicatePlayer { player_id: PlayerId },
    #[error("match records player {player_id} against themselves")]
    SelfMatch { player_id: PlayerId },
}

/// Why a reported match was refused.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum InvalidMatch {
    #[error("player {0} cannot play against themselves")]
    SelfMatch(PlayerId),
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
}
