//! Integration tests for the match lifecycle
//!
//! These tests check the transition table exhaustively and drive fixtures
//! through complete lifecycles.

use chrono::{TimeZone, Utc};
use plyaz_league::{
    entities::TeamId,
    fixture::{
        Fixture, FixtureError, MatchStatus, can_transition, validate_transition,
        validate_transition_str,
    },
};

const LEGAL: &[(MatchStatus, MatchStatus)] = &[
    (MatchStatus::Upcoming, MatchStatus::Live),
    (MatchStatus::Upcoming, MatchStatus::Postponed),
    (MatchStatus::Upcoming, MatchStatus::Cancelled),
    (MatchStatus::Live, MatchStatus::Completed),
    (MatchStatus::Live, MatchStatus::Postponed),
    (MatchStatus::Postponed, MatchStatus::Upcoming),
    (MatchStatus::Postponed, MatchStatus::Cancelled),
];

#[test]
fn test_every_pair_matches_the_table() {
    for from in MatchStatus::ALL {
        for to in MatchStatus::ALL {
            let expected = LEGAL.contains(&(from, to));
            assert_eq!(from.can_transition_to(to), expected, "{from} -> {to}");
            assert_eq!(
                validate_transition(from, to).is_ok(),
                expected,
                "{from} -> {to}"
            );
            assert_eq!(
                can_transition(from.as_str(), to.as_str()),
                expected,
                "{from} -> {to}"
            );
        }
    }
}

#[test]
fn test_terminal_states_have_no_exit() {
    for terminal in [MatchStatus::Completed, MatchStatus::Cancelled] {
        for to in MatchStatus::ALL {
            let err = validate_transition(terminal, to).unwrap_err();
            assert!(matches!(err, FixtureError::IllegalTransition { .. }));
            assert_eq!(err.status_code(), 409);
        }
    }
}

#[test]
fn test_rejection_message_is_descriptive() {
    let err = validate_transition_str("live", "upcoming").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("\"live\""));
    assert!(message.contains("\"upcoming\""));
}

#[test]
fn test_full_fixture_lifecycle() {
    let kickoff = Utc.with_ymd_and_hms(2026, 5, 2, 14, 0, 0).unwrap();
    let final_whistle = Utc.with_ymd_and_hms(2026, 5, 2, 15, 50, 0).unwrap();

    let fixture = Fixture::new(1, TeamId::new("home"), TeamId::new("away"), 3);
    let fixture = fixture
        .apply_transition(MatchStatus::Live, kickoff)
        .unwrap();
    let fixture = fixture.record_score(1, 1).unwrap();
    let fixture = fixture.record_score(1, 2).unwrap();
    let fixture = fixture
        .apply_transition(MatchStatus::Completed, final_whistle)
        .unwrap();

    let result = fixture.result().expect("completed fixture has a result");
    assert_eq!((result.home_goals, result.away_goals), (1, 2));

    // Completed fixtures are frozen
    assert!(
        fixture
            .apply_transition(MatchStatus::Live, final_whistle)
            .is_err()
    );
    assert_eq!(fixture.record_score(3, 2), Err(FixtureError::NotLive));
}

#[test]
fn test_postponed_then_cancelled() {
    let at = Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap();
    let fixture = Fixture::new(2, TeamId::new("a"), TeamId::new("b"), 1)
        .apply_transition(MatchStatus::Postponed, at)
        .and_then(|f| f.apply_transition(MatchStatus::Cancelled, at))
        .unwrap();

    assert_eq!(fixture.status, MatchStatus::Cancelled);
    assert!(fixture.status.is_terminal());
    assert!(fixture.result().is_none());
}
