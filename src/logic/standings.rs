//! Standings: tally wins and matches per player and rank them.

use crate::models::{IntegrityViolation, MatchRecord, Player, PlayerId, StandingsRow};
use std::collections::HashMap;

/// Compute the standings table from the registered players and the full match history.
///
/// 1. Start every player (including those who have not played) at 0 wins / 0 matches.
/// 2. Scan every record: both sides get a match, the winner gets a win.
/// 3. Sort by wins descending, then by player id ascending.
///
/// Order of `matches` does not matter. A record naming a player missing from `players`,
/// or naming the same player on both sides, is rejected rather than skipped.
pub fn compute_standings(
    players: &[Player],
    matches: &[MatchRecord],
) -> Result<Vec<StandingsRow>, IntegrityViolation> {
    let mut rows: Vec<StandingsRow> = Vec::with_capacity(players.len());
    let mut index: HashMap<PlayerId, usize> = HashMap::with_capacity(players.len());
    for p in players {
        if index.insert(p.id, rows.len()).is_some() {
            return Err(IntegrityViolation::DuplicatePlayer { player_id: p.id });
        }
        rows.push(StandingsRow::new(p.id, p.name.clone()));
    }

    for m in matches {
        if m.winner == m.loser {
            return Err(IntegrityViolation::SelfMatch { player_id: m.winner });
        }
        let winner = *index
            .get(&m.winner)
            .ok_or(IntegrityViolation::UnknownPlayer { player_id: m.winner })?;
        let loser = *index
            .get(&m.loser)
            .ok_or(IntegrityViolation::UnknownPlayer { player_id: m.loser })?;
        rows[winner].wins += 1;
        rows[winner].matches += 1;
        rows[loser].matches += 1;
    }

    rows.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(n: u32) -> Vec<Player> {
        (1..=n).map(|i| Player::new(i, format!("P{i}"))).collect()
    }

    #[test]
    fn players_without_matches_are_listed_in_id_order() {
        let mut ps = players(3);
        ps.reverse();
        let rows = compute_standings(&ps, &[]).unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(rows.iter().all(|r| r.wins == 0 && r.matches == 0));
    }

    #[test]
    fn winner_ranks_above_loser() {
        let rows = compute_standings(&players(2), &[MatchRecord::new(2, 1)]).unwrap();
        assert_eq!(rows[0].id, 2);
        assert_eq!((rows[0].wins, rows[0].matches), (1, 1));
        assert_eq!((rows[1].wins, rows[1].matches), (0, 1));
        assert_eq!(rows[1].losses(), 1);
    }

    #[test]
    fn unknown_player_is_rejected() {
        let err = compute_standings(&players(2), &[MatchRecord::new(1, 7)]).unwrap_err();
        assert_eq!(err, IntegrityViolation::UnknownPlayer { player_id: 7 });
    }

    #[test]
    fn self_match_is_rejected() {
        let err = compute_standings(&players(2), &[MatchRecord::new(2, 2)]).unwrap_err();
        assert_eq!(err, IntegrityViolation::SelfMatch { player_id: 2 });
    }

    #[test]
    fn duplicate_player_is_rejected() {
        let ps = vec![Player::new(1, "A"), Player::new(1, "A again")];
        let err = compute_standings(&ps, &[]).unwrap_err();
        assert_eq!(err, IntegrityViolation::DuplicatePlayer { player_id: 1 });
    }
}
