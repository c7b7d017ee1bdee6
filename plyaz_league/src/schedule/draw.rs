//! Random group draws.

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use crate::entities::TeamId;

/// A team's drawn group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAssignment {
    pub team: TeamId,
    /// Group index (0-indexed)
    pub group: usize,
}

/// Shuffle teams and deal them across `group_count` groups in turn.
///
/// Group sizes differ by at most one. Zero groups yields no assignments.
pub fn random_draw<R: Rng + ?Sized>(
    teams: &[TeamId],
    group_count: usize,
    rng: &mut R,
) -> Vec<GroupAssignment> {
    if group_count == 0 {
        return Vec::new();
    }

    let mut shuffled = teams.to_vec();
    shuffled.shuffle(rng);

    shuffled
        .into_iter()
        .enumerate()
        .map(|(idx, team)| GroupAssignment {
            team,
            group: idx % group_count,
        })
        .collect()
}

/// [`random_draw`] using the thread-local generator
pub fn random_draw_thread_rng(teams: &[TeamId], group_count: usize) -> Vec<GroupAssignment> {
    random_draw(teams, group_count, &mut rand::rng())
}

/// Collect assignments into one list of teams per group
pub fn into_groups(assignments: &[GroupAssignment], group_count: usize) -> Vec<Vec<TeamId>> {
    let mut groups = vec![Vec::new(); group_count];
    for assignment in assignments {
        if let Some(group) = groups.get_mut(assignment.group) {
            group.push(assignment.team.clone());
        }
    }
    groups
}
