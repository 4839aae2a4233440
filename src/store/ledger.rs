//! Ledger: the player roster and append-only match history every store keeps.

use crate::models::{InvalidMatch, MatchRecord, Player, PlayerId, TournamentError};
use serde::{Deserialize, Serialize};

/// Players, match records and the id counter.
///
/// Ids start at 1 and are never reused, even after `clear_players`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    last_player_id: PlayerId,
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Sanitize `name` and register a new player under the next free id.
    pub fn register_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        let name = sanitize_name(name).ok_or(TournamentError::EmptyPlayerName)?;
        let id = self.last_player_id + 1;
        self.last_player_id = id;
        log::info!("Registered player {} as #{}", name, id);
        self.players.push(Player::new(id, name));
        Ok(id)
    }

    /// Append one match outcome. Both players must be registered and distinct.
    pub fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), InvalidMatch> {
        if winner == loser {
            return Err(InvalidMatch::SelfMatch(winner));
        }
        for id in [winner, loser] {
            if !self.players.iter().any(|p| p.id == id) {
                return Err(InvalidMatch::UnknownPlayer(id));
            }
        }
        self.matches.push(MatchRecord::new(winner, loser));
        log::debug!("Recorded match: #{} beat #{}", winner, loser);
        Ok(())
    }

    /// Remove every match record. Returns how many were removed.
    pub fn clear_matches(&mut self) -> usize {
        let removed = self.matches.len();
        self.matches.clear();
        log::info!("Deleted {} match record(s)", removed);
        removed
    }

    /// Remove every player, and with them every match record (records may not outlive
    /// the players they reference). The id counter is kept.
    pub fn clear_players(&mut self) -> usize {
        self.clear_matches();
        let removed = self.players.len();
        self.players.clear();
        log::info!("Deleted {} player(s)", removed);
        removed
    }
}

/// Trim a display name and escape `&`, `<` and `>` so it renders as text in HTML.
/// An `&` that already starts an entity (`&amp;`, `&#39;`, `&#x27;`) is kept as is; quotes are
/// left alone. Returns `None` if nothing is left after trimming.
pub fn sanitize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut out = String::with_capacity(trimmed.len());
    for (i, c) in trimmed.char_indices() {
        match c {
            '&' if starts_entity(&trimmed[i + 1..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Some(out)
}

/// Whether `rest` (the text after an `&`) is the body of a named or numeric entity.
fn starts_entity(rest: &str) -> bool {
    let Some(end) = rest.find(';') else {
        return false;
    };
    let body = &rest[..end];
    if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else if let Some(dec) = body.strip_prefix('#') {
        !dec.is_empty() && dec.chars().all(|c| c.is_ascii_digit())
    } else {
        body.starts_with(|c: char| c.is_ascii_alphabetic())
            && body.chars().all(|c| c.is_ascii_alphanumeric())
    }
}
