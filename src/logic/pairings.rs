//! Swiss pairings: pair adjacent players in the standings.

use crate::models::{IntegrityViolation, Pairing, StandingsRow, TournamentError};
use std::collections::HashSet;

/// Pair the ranked standings for the next round.
///
/// Rank 1 plays rank 2, rank 3 plays rank 4, and so on down the table. The result is a pure
/// function of the input order. Rematches are not avoided.
///
/// Fails with `OddPlayerCount` when the table has an odd length (there are no byes), and with
/// `DataIntegrity` when a player id appears twice. Nothing is returned on failure.
pub fn compute_pairings(standings: &[StandingsRow]) -> Result<Vec<Pairing>, TournamentError> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount {
            count: standings.len(),
        });
    }

    let mut seen = HashSet::with_capacity(standings.len());
    for row in standings {
        if !seen.insert(row.id) {
            return Err(IntegrityViolation::DuplicatePlayer { player_id: row.id }.into());
        }
    }

    let pairings = standings
        .chunks_exact(2)
        .map(|pair| Pairing::new(&pair[0], &pair[1]))
        .collect();
    Ok(pairings)
}
