//! Standings data models.

use serde::{Deserialize, Serialize};

use crate::entities::TeamId;

/// Points awarded per result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointScheme {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl PointScheme {
    pub const fn new(win: u32, draw: u32, loss: u32) -> Self {
        Self { win, draw, loss }
    }
}

impl Default for PointScheme {
    /// Three points for a win, one for a draw
    fn default() -> Self {
        Self::new(3, 1, 0)
    }
}

/// One team's aggregate record in a competition.
///
/// Points and goal difference are always derived from the counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: TeamId,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl StandingsRow {
    /// Create an empty row for a team
    pub fn new(team: TeamId) -> Self {
        Self {
            team,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
        }
    }

    #[must_use]
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    #[must_use]
    pub fn points(&self, scheme: &PointScheme) -> i64 {
        i64::from(self.won) * i64::from(scheme.win)
            + i64::from(self.drawn) * i64::from(scheme.draw)
            + i64::from(self.lost) * i64::from(scheme.loss)
    }

    /// Add one played match to this row. Counters saturate at `u32::MAX`.
    pub fn record(&mut self, goals_for: u32, goals_against: u32) {
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(goals_for);
        self.goals_against = self.goals_against.saturating_add(goals_against);
        let outcome = match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => &mut self.won,
            std::cmp::Ordering::Equal => &mut self.drawn,
            std::cmp::Ordering::Less => &mut self.lost,
        };
        *outcome = outcome.saturating_add(1);
    }
}

/// A row placed in a finished table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedRow {
    /// Table position (1-indexed)
    pub position: usize,
    #[serde(flatten)]
    pub row: StandingsRow,
    pub goal_difference: i64,
    pub points: i64,
}

/// Score line of a completed match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home: TeamId,
    pub away: TeamId,
    pub home_goals: u32,
    pub away_goals: u32,
}
