//! Knockout bracket data models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::TeamId;

/// Entrants are teams
pub type EntrantId = TeamId;

/// A team placed into a bracket with its seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant {
    pub id: EntrantId,
    /// Seed rank, 1 is the strongest
    pub seed: u32,
}

impl Entrant {
    pub fn new(id: &str, seed: u32) -> Self {
        Self {
            id: TeamId::new(id),
            seed,
        }
    }
}

/// Address of a match within a bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRef {
    /// Round number (1-indexed)
    pub round: u32,
    /// Position within the round (0-indexed)
    pub position: usize,
}

impl MatchRef {
    pub const fn new(round: u32, position: usize) -> Self {
        Self { round, position }
    }
}

impl fmt::Display for MatchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round {} position {}", self.round, self.position)
    }
}

/// Which slot of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// One side of a bracket match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// A known team
    Entrant(EntrantId),
    /// Waiting on the winner of an earlier match
    Pending { from: MatchRef },
    /// No opponent; the other slot advances unplayed
    Bye,
}

impl Slot {
    #[must_use]
    pub fn entrant(&self) -> Option<&EntrantId> {
        match self {
            Slot::Entrant(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }
}

/// A single match in the bracket arena
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub round: u32,
    pub position: usize,
    pub home: Slot,
    pub away: Slot,
    pub winner: Option<EntrantId>,
    /// Next-round slot fed by the winner, `None` for the final
    pub feeds: Option<(MatchRef, Side)>,
}

impl BracketMatch {
    #[must_use]
    pub fn at(&self) -> MatchRef {
        MatchRef::new(self.round, self.position)
    }

    #[must_use]
    pub fn slot(&self, side: Side) -> &Slot {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub(super) fn slot_mut(&mut self, side: Side) -> &mut Slot {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    /// Whether one side of this match is a bye
    #[must_use]
    pub fn is_bye(&self) -> bool {
        self.home.is_bye() || self.away.is_bye()
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.winner.is_some()
    }

    /// Both teams are known and no winner is recorded yet
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.winner.is_none() && self.home.entrant().is_some() && self.away.entrant().is_some()
    }
}

/// Display name for a round given the total number of rounds
pub fn round_name(total_rounds: u32, round: u32) -> String {
    match total_rounds.saturating_sub(round) {
        0 => "Final".to_string(),
        1 => "Semi-Finals".to_string(),
        2 => "Quarter-Finals".to_string(),
        remaining => format!("Round of {}", 1u64 << (remaining + 1)),
    }
}
