//! Tournament business logic: standings and Swiss pairings. Pure functions of a snapshot.

mod pairings;
mod standings;

pub use pairings::compute_pairings;
pub use standings::compute_standings;
