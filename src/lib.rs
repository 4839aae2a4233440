//! Swiss-system tournament organizer: library with models, pairing logic and stores.

pub mod interchange;
pub mod logic;
pub mod models;
pub mod store;
pub mod tournament;

pub use logic::{compute_pairings, compute_standings};
pub use models::{
    IntegrityViolation, InvalidMatch, MatchRecord, Pairing, Player, PlayerId, StandingsRow,
    TournamentError,
};
pub use store::{JsonFileStore, Ledger, MemoryStore, Snapshot, Store, StoreError};
pub use tournament::Tournament;
