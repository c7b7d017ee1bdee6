//! Building standings rows from completed match results.

use std::collections::HashMap;

use super::models::{MatchResult, StandingsRow};
use crate::entities::TeamId;

/// Build one row per team from a set of results.
///
/// Rows for `teams` come first, in the given order, even when a team has not
/// played. Teams seen only in `results` are appended in order of first
/// appearance.
pub fn aggregate(results: &[MatchResult], teams: &[TeamId]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = Vec::with_capacity(teams.len());
    let mut index: HashMap<TeamId, usize> = HashMap::with_capacity(teams.len());

    for team in teams {
        if !index.contains_key(team) {
            index.insert(team.clone(), rows.len());
            rows.push(StandingsRow::new(team.clone()));
        }
    }

    for result in results {
        let home = row_index(&mut rows, &mut index, &result.home);
        rows[home].record(result.home_goals, result.away_goals);

        let away = row_index(&mut rows, &mut index, &result.away);
        rows[away].record(result.away_goals, result.home_goals);
    }

    rows
}

fn row_index(
    rows: &mut Vec<StandingsRow>,
    index: &mut HashMap<TeamId, usize>,
    team: &TeamId,
) -> usize {
    *index.entry(team.clone()).or_insert_with(|| {
        rows.push(StandingsRow::new(team.clone()));
        rows.len() - 1
    })
}
