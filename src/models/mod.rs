//! Data structures for the tournament: players, match records, standings, pairings.

mod error;
mod game;
mod player;
mod standings;

pub use error::{IntegrityViolation, InvalidMatch, TournamentError};
pub use game::MatchRecord;
pub use player::{Player, PlayerId};
pub use standings::{Pairing, StandingsRow};
