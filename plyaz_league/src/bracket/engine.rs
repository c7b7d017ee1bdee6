//! Bracket generation and winner advancement.

use bincode::serde::{decode_from_slice, encode_to_vec};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{
    errors::{BracketError, BracketResult, SnapshotError},
    models::{BracketMatch, Entrant, EntrantId, MatchRef, Side, Slot, round_name},
    seeding::seeded_order,
};

/// A single-elimination bracket.
///
/// Matches live in one flat arena ordered by round then position. Round `r`
/// holds `bracket_size >> r` matches, so any `(round, position)` maps to an
/// index without searching, and links between rounds are plain addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    bracket_size: usize,
    total_rounds: u32,
    matches: Vec<BracketMatch>,
}

impl Bracket {
    /// Build a complete bracket from seeded entrants.
    ///
    /// Entrants are placed by seed rank: the lowest seed number takes bracket
    /// seed 1, the next takes seed 2, and so on. Missing slots up to the next
    /// power of two become byes against the top seeds, and those entrants are
    /// advanced into round 2 straight away.
    pub fn generate(entrants: &[Entrant]) -> BracketResult<Self> {
        let ranked = rank_entrants(entrants)?;
        let entrant_count = ranked.len();
        let bracket_size = entrant_count.next_power_of_two();
        let total_rounds = bracket_size.trailing_zeros();
        let order = seeded_order(bracket_size);

        let slot_for = |seed: usize| match ranked.get(seed - 1) {
            Some(entrant) => Slot::Entrant(entrant.id.clone()),
            None => Slot::Bye,
        };

        let mut matches = Vec::with_capacity(bracket_size - 1);
        for round in 1..=total_rounds {
            let count = bracket_size >> round;
            for position in 0..count {
                let (home, away) = if round == 1 {
                    (slot_for(order[2 * position]), slot_for(order[2 * position + 1]))
                } else {
                    (
                        Slot::Pending {
                            from: MatchRef::new(round - 1, 2 * position),
                        },
                        Slot::Pending {
                            from: MatchRef::new(round - 1, 2 * position + 1),
                        },
                    )
                };

                let feeds = (round < total_rounds).then(|| {
                    let side = if position % 2 == 0 {
                        Side::Home
                    } else {
                        Side::Away
                    };
                    (MatchRef::new(round + 1, position / 2), side)
                });

                matches.push(BracketMatch {
                    round,
                    position,
                    home,
                    away,
                    winner: None,
                    feeds,
                });
            }
        }

        let mut bracket = Self {
            bracket_size,
            total_rounds,
            matches,
        };
        bracket.advance_byes();

        debug!(
            "generated bracket: {} entrants, size {}, {} rounds, {} byes",
            entrant_count,
            bracket_size,
            total_rounds,
            bracket.bye_count()
        );
        Ok(bracket)
    }

    /// Same as [`Bracket::generate`], rejecting more than `max_entrants` entrants
    pub fn generate_with_limit(entrants: &[Entrant], max_entrants: usize) -> BracketResult<Self> {
        if entrants.len() > max_entrants {
            return Err(BracketError::InvalidBracketInput(format!(
                "{} entrants exceeds the limit of {}",
                entrants.len(),
                max_entrants
            )));
        }
        Self::generate(entrants)
    }

    /// Record an already-decided winner and move them into the next round.
    ///
    /// Returns the match the winner now plays in, or `None` after the final.
    /// Nothing is changed when the call is rejected.
    pub fn record_winner(
        &mut self,
        at: MatchRef,
        winner: &EntrantId,
    ) -> BracketResult<Option<MatchRef>> {
        let idx = self
            .check_recordable(at, winner)
            .inspect_err(|e| warn!("rejected bracket result: {e}"))?;

        let feeds = self.matches[idx].feeds;
        self.matches[idx].winner = Some(winner.clone());
        if let Some((next, side)) = feeds {
            self.place(next, side, winner.clone());
        }

        debug!("{winner} won {at}");
        Ok(feeds.map(|(next, _)| next))
    }

    fn check_recordable(&self, at: MatchRef, winner: &EntrantId) -> BracketResult<usize> {
        let idx = self
            .index_of(at)
            .ok_or(BracketError::UnknownMatchReference(at))?;
        let m = &self.matches[idx];

        if m.is_resolved() {
            return Err(BracketError::AlreadyResolved(at));
        }

        let (Some(home), Some(away)) = (m.home.entrant(), m.away.entrant()) else {
            return Err(BracketError::UnresolvedOpponent(at));
        };

        if winner != home && winner != away {
            return Err(BracketError::NotAParticipant {
                at,
                entrant: winner.clone(),
            });
        }

        Ok(idx)
    }

    /// First-round byes resolve at generation and never later.
    fn advance_byes(&mut self) {
        let first_round = self.bracket_size / 2;
        for idx in 0..first_round {
            let m = &self.matches[idx];
            let advancing = match (&m.home, &m.away) {
                (Slot::Entrant(id), Slot::Bye) | (Slot::Bye, Slot::Entrant(id)) => id.clone(),
                _ => continue,
            };
            let feeds = m.feeds;

            self.matches[idx].winner = Some(advancing.clone());
            if let Some((next, side)) = feeds {
                self.place(next, side, advancing);
            }
        }
    }

    fn place(&mut self, at: MatchRef, side: Side, entrant: EntrantId) {
        if let Some(idx) = self.index_of(at) {
            *self.matches[idx].slot_mut(side) = Slot::Entrant(entrant);
        }
    }

    fn index_of(&self, at: MatchRef) -> Option<usize> {
        if at.round == 0 || at.round > self.total_rounds {
            return None;
        }
        let count = self.bracket_size >> at.round;
        (at.position < count).then(|| self.bracket_size - 2 * count + at.position)
    }

    /// Get a match by address
    #[must_use]
    pub fn get(&self, at: MatchRef) -> Option<&BracketMatch> {
        self.index_of(at).map(|idx| &self.matches[idx])
    }

    /// Matches of one round in position order; empty for an unknown round
    #[must_use]
    pub fn round(&self, round: u32) -> &[BracketMatch] {
        if round == 0 || round > self.total_rounds {
            return &[];
        }
        let count = self.bracket_size >> round;
        let start = self.bracket_size - 2 * count;
        &self.matches[start..start + count]
    }

    /// Iterate rounds as `(round number, matches)`
    pub fn rounds(&self) -> impl Iterator<Item = (u32, &[BracketMatch])> {
        (1..=self.total_rounds).map(|round| (round, self.round(round)))
    }

    #[must_use]
    pub fn matches(&self) -> &[BracketMatch] {
        &self.matches
    }

    #[must_use]
    pub fn round_name(&self, round: u32) -> Option<String> {
        (round >= 1 && round <= self.total_rounds).then(|| round_name(self.total_rounds, round))
    }

    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    /// Number of first-round slots, a power of two
    #[must_use]
    pub fn bracket_size(&self) -> usize {
        self.bracket_size
    }

    /// Entrants placed in the first round
    pub fn entrants(&self) -> impl Iterator<Item = &EntrantId> {
        self.round(1)
            .iter()
            .flat_map(|m| [m.home.entrant(), m.away.entrant()])
            .flatten()
    }

    #[must_use]
    pub fn bye_count(&self) -> usize {
        self.round(1)
            .iter()
            .map(|m| usize::from(m.home.is_bye()) + usize::from(m.away.is_bye()))
            .sum()
    }

    /// Matches that can be played now
    #[must_use]
    pub fn playable_matches(&self) -> Vec<MatchRef> {
        self.matches
            .iter()
            .filter(|m| m.is_playable())
            .map(BracketMatch::at)
            .collect()
    }

    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.matches.iter().filter(|m| !m.is_resolved()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.champion().is_some()
    }

    /// Winner of the final, once recorded
    #[must_use]
    pub fn champion(&self) -> Option<&EntrantId> {
        self.matches.last().and_then(|m| m.winner.as_ref())
    }

    /// Encode the bracket for storage between requests
    pub fn to_snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(encode_to_vec(self, bincode::config::standard())?)
    }

    /// Decode a stored bracket, checking that its shape is intact
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let (bracket, _): (Bracket, usize) =
            decode_from_slice(bytes, bincode::config::standard())?;
        bracket.check_geometry()?;
        Ok(bracket)
    }

    fn check_geometry(&self) -> Result<(), SnapshotError> {
        if self.bracket_size < 2 || !self.bracket_size.is_power_of_two() {
            return Err(SnapshotError::Corrupt(format!(
                "bracket size {} is not a power of two",
                self.bracket_size
            )));
        }
        if self.total_rounds != self.bracket_size.trailing_zeros() {
            return Err(SnapshotError::Corrupt(format!(
                "{} rounds for bracket size {}",
                self.total_rounds, self.bracket_size
            )));
        }
        if self.matches.len() != self.bracket_size - 1 {
            return Err(SnapshotError::Corrupt(format!(
                "{} matches for bracket size {}",
                self.matches.len(),
                self.bracket_size
            )));
        }
        for (idx, m) in self.matches.iter().enumerate() {
            if self.index_of(m.at()) != Some(idx) {
                return Err(SnapshotError::Corrupt(format!(
                    "match {} stored at index {}",
                    m.at(),
                    idx
                )));
            }
            let expected_feeds = (m.round < self.total_rounds).then(|| {
                let side = if m.position % 2 == 0 {
                    Side::Home
                } else {
                    Side::Away
                };
                (MatchRef::new(m.round + 1, m.position / 2), side)
            });
            if m.feeds != expected_feeds {
                return Err(SnapshotError::Corrupt(format!(
                    "match {} is wired to the wrong slot",
                    m.at()
                )));
            }
            self.check_slots(m)?;
        }
        Ok(())
    }

    /// Slots must agree with their feeder matches, and a winner must be one
    /// of the two entrants.
    fn check_slots(&self, m: &BracketMatch) -> Result<(), SnapshotError> {
        for (side, offset) in [(Side::Home, 0), (Side::Away, 1)] {
            let slot = m.slot(side);
            if m.round == 1 {
                if matches!(slot, Slot::Pending { .. }) {
                    return Err(SnapshotError::Corrupt(format!(
                        "first-round match {} waits on an earlier match",
                        m.at()
                    )));
                }
                continue;
            }

            let from = MatchRef::new(m.round - 1, 2 * m.position + offset);
            let feeder_winner = self.get(from).and_then(|f| f.winner.as_ref());
            let consistent = match slot {
                Slot::Pending { from: stored } => *stored == from && feeder_winner.is_none(),
                Slot::Entrant(id) => feeder_winner == Some(id),
                Slot::Bye => false,
            };
            if !consistent {
                return Err(SnapshotError::Corrupt(format!(
                    "match {} disagrees with its feeder {}",
                    m.at(),
                    from
                )));
            }
        }

        if let Some(winner) = &m.winner {
            if m.home.entrant() != Some(winner) && m.away.entrant() != Some(winner) {
                return Err(SnapshotError::Corrupt(format!(
                    "{winner} did not play in match {}",
                    m.at()
                )));
            }
        }
        Ok(())
    }
}

/// Validate entrants and order them by seed.
fn rank_entrants(entrants: &[Entrant]) -> BracketResult<Vec<&Entrant>> {
    if entrants.len() < 2 {
        return Err(BracketError::InvalidBracketInput(format!(
            "need at least 2 entrants, got {}",
            entrants.len()
        )));
    }

    let mut ids = HashSet::with_capacity(entrants.len());
    for entrant in entrants {
        if entrant.seed == 0 {
            return Err(BracketError::InvalidBracketInput(format!(
                "{} has seed 0; seeds start at 1",
                entrant.id
            )));
        }
        if !ids.insert(&entrant.id) {
            return Err(BracketError::InvalidBracketInput(format!(
                "entrant {} listed more than once",
                entrant.id
            )));
        }
    }

    let mut ranked: Vec<&Entrant> = entrants.iter().collect();
    ranked.sort_by_key(|e| e.seed);
    if let Some(pair) = ranked.windows(2).find(|w| w[0].seed == w[1].seed) {
        return Err(BracketError::InvalidBracketInput(format!(
            "seed {} is held by both {} and {}",
            pair[0].seed, pair[0].id, pair[1].id
        )));
    }

    Ok(ranked)
}
