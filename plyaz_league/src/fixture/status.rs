//! Match status and the legal-successor table.

use log::warn;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::errors::{FixtureError, FixtureResult};

/// Lifecycle status of a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
    Postponed,
    Cancelled,
}

/// Every status paired with the statuses it may move to.
const LEGAL_SUCCESSORS: [(MatchStatus, &[MatchStatus]); 5] = [
    (
        MatchStatus::Upcoming,
        &[MatchStatus::Live, MatchStatus::Postponed, MatchStatus::Cancelled],
    ),
    (
        MatchStatus::Live,
        &[MatchStatus::Completed, MatchStatus::Postponed],
    ),
    (MatchStatus::Completed, &[]),
    (
        MatchStatus::Postponed,
        &[MatchStatus::Upcoming, MatchStatus::Cancelled],
    ),
    (MatchStatus::Cancelled, &[]),
];

impl MatchStatus {
    pub const ALL: [MatchStatus; 5] = [
        MatchStatus::Upcoming,
        MatchStatus::Live,
        MatchStatus::Completed,
        MatchStatus::Postponed,
        MatchStatus::Cancelled,
    ];

    /// Statuses reachable from this one in a single step
    #[must_use]
    pub fn successors(self) -> &'static [MatchStatus] {
        LEGAL_SUCCESSORS
            .iter()
            .find(|(from, _)| *from == self)
            .map(|(_, to)| *to)
            .unwrap_or(&[])
    }

    /// Check if transition to another state is valid
    ///
    /// Re-entering the current status is never valid.
    #[must_use]
    pub fn can_transition_to(self, to: MatchStatus) -> bool {
        self.successors().contains(&to)
    }

    /// Check if state is terminal
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
            MatchStatus::Postponed => "postponed",
            MatchStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| FixtureError::UnknownStatus(s.to_string()))
    }
}

/// Advisory check that a status change is legal.
///
/// Nothing is mutated; the caller applies the change only on `Ok`.
pub fn validate_transition(from: MatchStatus, to: MatchStatus) -> FixtureResult<()> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        warn!("rejected match status transition {from} -> {to}");
        Err(FixtureError::IllegalTransition {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

/// String form of [`MatchStatus::can_transition_to`].
///
/// Unknown status strings have no successors and are never a legal target.
#[must_use]
pub fn can_transition(from: &str, to: &str) -> bool {
    match (from.parse::<MatchStatus>(), to.parse::<MatchStatus>()) {
        (Ok(from), Ok(to)) => from.can_transition_to(to),
        _ => false,
    }
}

/// String form of [`validate_transition`] for callers holding raw status values.
pub fn validate_transition_str(from: &str, to: &str) -> FixtureResult<()> {
    if can_transition(from, to) {
        Ok(())
    } else {
        warn!("rejected match status transition {from:?} -> {to:?}");
        Err(FixtureError::IllegalTransition {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}
