//! League table ordering.

use log::trace;
use std::cmp::Ordering;

use super::models::{PointScheme, RankedRow, StandingsRow};

/// Order rows by points, then goal difference, then goals scored.
///
/// All three keys descend. Rows equal on every key keep their input order.
/// No further tie-break is applied.
pub fn rank(rows: &[StandingsRow], scheme: &PointScheme) -> Vec<RankedRow> {
    let mut ranked: Vec<RankedRow> = rows
        .iter()
        .map(|row| RankedRow {
            position: 0,
            row: row.clone(),
            goal_difference: row.goal_difference(),
            points: row.points(scheme),
        })
        .collect();

    // `sort_by` is stable, which the fallback ordering relies on.
    ranked.sort_by(compare);

    for (idx, entry) in ranked.iter_mut().enumerate() {
        entry.position = idx + 1;
    }

    trace!("ranked {} standings rows", ranked.len());
    ranked
}

/// Same ordering as [`rank`], returning bare rows
pub fn sort_rows(rows: &[StandingsRow], scheme: &PointScheme) -> Vec<StandingsRow> {
    rank(rows, scheme).into_iter().map(|entry| entry.row).collect()
}

fn compare(a: &RankedRow, b: &RankedRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.row.goals_for.cmp(&a.row.goals_for))
}
