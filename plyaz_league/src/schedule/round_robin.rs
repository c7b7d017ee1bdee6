//! Round-robin fixture generation using the circle method.

use serde::{Deserialize, Serialize};

use crate::{
    entities::TeamId,
    fixture::{Fixture, FixtureId},
};

/// One generated pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledFixture {
    /// Round number (1-indexed)
    pub round: u32,
    pub home: TeamId,
    pub away: TeamId,
}

impl ScheduledFixture {
    /// Turn the pairing into an upcoming fixture record
    pub fn into_fixture(self, id: FixtureId) -> Fixture {
        Fixture::new(id, self.home, self.away, self.round)
    }
}

/// Every team meets every other team once.
///
/// The first team stays fixed while the rest rotate one place per round. An
/// odd field gets a bye placeholder, so each round one team sits out. Fewer
/// than two teams produce no fixtures.
pub fn round_robin(teams: &[TeamId]) -> Vec<ScheduledFixture> {
    if teams.len() < 2 {
        return Vec::new();
    }

    // `None` is the bye placeholder
    let mut slots: Vec<Option<&TeamId>> = teams.iter().map(Some).collect();
    if slots.len() % 2 != 0 {
        slots.push(None);
    }

    let n = slots.len();
    let fixed = slots[0];
    let mut rotating = slots[1..].to_vec();
    let mut fixtures = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);

    for round in 1..n as u32 {
        let mut pair = |home: Option<&TeamId>, away: Option<&TeamId>| {
            if let (Some(home), Some(away)) = (home, away) {
                fixtures.push(ScheduledFixture {
                    round,
                    home: home.clone(),
                    away: away.clone(),
                });
            }
        };

        pair(fixed, rotating[0]);
        for i in 1..n / 2 {
            pair(rotating[i], rotating[n - 1 - i]);
        }

        rotating.rotate_right(1);
    }

    fixtures
}

/// Two legs: the single schedule, then the same pairings with venues swapped
pub fn double_round_robin(teams: &[TeamId]) -> Vec<ScheduledFixture> {
    let first_leg = round_robin(teams);
    let leg_rounds = first_leg.iter().map(|f| f.round).max().unwrap_or(0);

    let second_leg: Vec<ScheduledFixture> = first_leg
        .iter()
        .map(|f| ScheduledFixture {
            round: f.round + leg_rounds,
            home: f.away.clone(),
            away: f.home.clone(),
        })
        .collect();

    first_leg.into_iter().chain(second_leg).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn teams(n: usize) -> Vec<TeamId> {
        (0..n).map(|i| TeamId::new(&format!("t{i}"))).collect()
    }

    fn pair_key(f: &ScheduledFixture) -> (TeamId, TeamId) {
        if f.home < f.away {
            (f.home.clone(), f.away.clone())
        } else {
            (f.away.clone(), f.home.clone())
        }
    }

    #[test]
    fn test_too_few_teams() {
        assert!(round_robin(&[]).is_empty());
        assert!(round_robin(&teams(1)).is_empty());
    }

    #[test]
    fn test_every_pair_meets_once() {
        for n in 2..=9 {
            let fixtures = round_robin(&teams(n));
            assert_eq!(fixtures.len(), n * (n - 1) / 2, "n = {n}");

            let pairs: HashSet<_> = fixtures.iter().map(pair_key).collect();
            assert_eq!(pairs.len(), fixtures.len(), "n = {n}");
            assert!(fixtures.iter().all(|f| f.home != f.away));
        }
    }

    #[test]
    fn test_no_team_plays_twice_in_a_round() {
        for n in 2..=9 {
            let fixtures = round_robin(&teams(n));
            let rounds = if n % 2 == 0 { n - 1 } else { n };
            for round in 1..=rounds as u32 {
                let in_round: Vec<_> = fixtures.iter().filter(|f| f.round == round).collect();
                assert_eq!(in_round.len(), n / 2, "n = {n}, round {round}");

                let mut seen = HashSet::new();
                for f in in_round {
                    assert!(seen.insert(&f.home));
                    assert!(seen.insert(&f.away));
                }
            }
        }
    }

    #[test]
    fn test_double_round_robin_mirrors_first_leg() {
        let fixtures = double_round_robin(&teams(4));
        assert_eq!(fixtures.len(), 12);

        let (first, second) = fixtures.split_at(6);
        for (a, b) in first.iter().zip(second) {
            assert_eq!(a.home, b.away);
            assert_eq!(a.away, b.home);
            assert_eq!(a.round + 3, b.round);
        }
    }

    #[test]
    fn test_into_fixture() {
        let f = round_robin(&teams(2)).remove(0).into_fixture(11);
        assert_eq!(f.id, 11);
        assert_eq!(f.round, 1);
        assert_eq!(f.status, crate::fixture::MatchStatus::Upcoming);
    }
}
