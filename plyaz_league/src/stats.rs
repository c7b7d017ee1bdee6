//! Player statistics from match events.

use serde::{Deserialize, Serialize};

use crate::entities::{PlayerId, TeamId};

/// Kind of in-match event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Goal,
    Penalty,
    Assist,
    YellowCard,
    RedCard,
    Substitution,
    #[serde(other)]
    Other,
}

/// A single event recorded during a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub player_id: Option<PlayerId>,
    pub team_id: Option<TeamId>,
}

/// Totals for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

/// Count one player's goals, assists and cards. Penalties count as goals.
pub fn aggregate_player_stats(events: &[MatchEvent], player: &PlayerId) -> PlayerStats {
    let mut stats = PlayerStats::default();

    for event in events
        .iter()
        .filter(|e| e.player_id.as_ref() == Some(player))
    {
        match event.kind {
            EventKind::Goal | EventKind::Penalty => stats.goals += 1,
            EventKind::Assist => stats.assists += 1,
            EventKind::YellowCard => stats.yellow_cards += 1,
            EventKind::RedCard => stats.red_cards += 1,
            EventKind::Substitution | EventKind::Other => {}
        }
    }

    stats
}
