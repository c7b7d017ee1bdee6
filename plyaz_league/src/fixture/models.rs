//! Fixture records carried between the lifecycle machine and its callers.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    errors::{FixtureError, FixtureResult},
    status::{MatchStatus, validate_transition},
};
use crate::{entities::TeamId, standings::MatchResult};

/// Fixture ID type
pub type FixtureId = i64;

/// Final or running score of a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// A scheduled match between two teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Fixture ID
    pub id: FixtureId,
    pub home: TeamId,
    pub away: TeamId,
    /// Matchday or round number (1-indexed)
    pub round: u32,
    /// Current lifecycle status
    pub status: MatchStatus,
    pub score: Option<Score>,
    /// Set when the match goes live
    pub started_at: Option<DateTime<Utc>>,
    /// Set when the match is completed
    pub ended_at: Option<DateTime<Utc>>,
}

impl Fixture {
    /// Create an upcoming fixture
    pub fn new(id: FixtureId, home: TeamId, away: TeamId, round: u32) -> Self {
        Self {
            id,
            home,
            away,
            round,
            status: MatchStatus::Upcoming,
            score: None,
            started_at: None,
            ended_at: None,
        }
    }

    /// Apply a validated status change, returning the updated fixture.
    ///
    /// `at` is the caller's clock reading. It is stamped into `started_at`
    /// when the match goes live and into `ended_at` when it completes.
    /// A postponed fixture that returns to `upcoming` loses its start time
    /// and any score from the abandoned attempt.
    pub fn apply_transition(&self, to: MatchStatus, at: DateTime<Utc>) -> FixtureResult<Fixture> {
        validate_transition(self.status, to)?;

        let mut next = self.clone();
        next.status = to;
        match to {
            MatchStatus::Live => {
                next.started_at = Some(at);
                next.score = Some(Score { home: 0, away: 0 });
            }
            MatchStatus::Completed => next.ended_at = Some(at),
            MatchStatus::Upcoming => {
                next.started_at = None;
                next.score = None;
            }
            MatchStatus::Postponed | MatchStatus::Cancelled => {}
        }

        debug!("fixture {} moved {} -> {}", self.id, self.status, to);
        Ok(next)
    }

    /// Update the score of a live match
    pub fn record_score(&self, home: u32, away: u32) -> FixtureResult<Fixture> {
        if self.status != MatchStatus::Live {
            return Err(FixtureError::NotLive);
        }

        let mut next = self.clone();
        next.score = Some(Score { home, away });
        Ok(next)
    }

    /// Result usable by standings, once the fixture is completed
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        if self.status != MatchStatus::Completed {
            return None;
        }

        self.score.map(|score| MatchResult {
            home: self.home.clone(),
            away: self.away.clone(),
            home_goals: score.home,
            away_goals: score.away,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0).unwrap()
    }

    fn fixture() -> Fixture {
        Fixture::new(7, TeamId::new("lions"), TeamId::new("tigers"), 1)
    }

    #[test]
    fn test_going_live_stamps_start() {
        let live = fixture()
            .apply_transition(MatchStatus::Live, kickoff())
            .unwrap();
        assert_eq!(live.status, MatchStatus::Live);
        assert_eq!(live.started_at, Some(kickoff()));
        assert_eq!(live.ended_at, None);
        assert_eq!(live.score, Some(Score { home: 0, away: 0 }));
    }

    #[test]
    fn test_completion_stamps_end() {
        let end = kickoff() + chrono::Duration::minutes(105);
        let done = fixture()
            .apply_transition(MatchStatus::Live, kickoff())
            .and_then(|f| f.record_score(2, 1))
            .and_then(|f| f.apply_transition(MatchStatus::Completed, end))
            .unwrap();

        assert_eq!(done.started_at, Some(kickoff()));
        assert_eq!(done.ended_at, Some(end));
        assert_eq!(
            done.result(),
            Some(MatchResult {
                home: TeamId::new("lions"),
                away: TeamId::new("tigers"),
                home_goals: 2,
                away_goals: 1,
            })
        );
    }

    #[test]
    fn test_rejected_transition_leaves_fixture_untouched() {
        let original = fixture();
        let err = original
            .apply_transition(MatchStatus::Completed, kickoff())
            .unwrap_err();
        assert!(matches!(err, FixtureError::IllegalTransition { .. }));
        assert_eq!(original, fixture());
    }

    #[test]
    fn test_rescheduling_clears_start() {
        let rescheduled = fixture()
            .apply_transition(MatchStatus::Live, kickoff())
            .and_then(|f| f.apply_transition(MatchStatus::Postponed, kickoff()))
            .and_then(|f| f.apply_transition(MatchStatus::Upcoming, kickoff()))
            .unwrap();
        assert_eq!(rescheduled.status, MatchStatus::Upcoming);
        assert_eq!(rescheduled.started_at, None);
    }

    #[test]
    fn test_replayed_match_starts_from_nil_nil() {
        let rescheduled = fixture()
            .apply_transition(MatchStatus::Live, kickoff())
            .and_then(|f| f.record_score(3, 0))
            .and_then(|f| f.apply_transition(MatchStatus::Postponed, kickoff()))
            .and_then(|f| f.apply_transition(MatchStatus::Upcoming, kickoff()))
            .unwrap();
        assert_eq!(rescheduled.score, None);

        let replay = kickoff() + chrono::Duration::days(7);
        let done = rescheduled
            .apply_transition(MatchStatus::Live, replay)
            .and_then(|f| {
                assert_eq!(f.score, Some(Score { home: 0, away: 0 }));
                f.apply_transition(MatchStatus::Completed, replay)
            })
            .unwrap();
        let result = done.result().unwrap();
        assert_eq!((result.home_goals, result.away_goals), (0, 0));
    }

    #[test]
    fn test_score_requires_live_match() {
        assert_eq!(fixture().record_score(1, 0), Err(FixtureError::NotLive));
    }

    #[test]
    fn test_result_only_for_completed() {
        let live = fixture()
            .apply_transition(MatchStatus::Live, kickoff())
            .unwrap();
        assert!(live.result().is_none());
    }
}
