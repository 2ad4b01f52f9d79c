//! Team selection for power-up effects.
//!
//! Ranking ties are broken by roster order: the first team holding the
//! extreme score wins. Random targets are drawn uniformly among every team
//! except the activator.

use crate::core::{RandomSource, Team, TeamId};

/// Highest-scoring team, first in roster order on ties.
#[must_use]
pub fn highest_team(teams: &[Team]) -> Option<&Team> {
    teams.iter().fold(None, |best: Option<&Team>, team| match best {
        Some(b) if b.score >= team.score => Some(b),
        _ => Some(team),
    })
}

/// Lowest-scoring team, first in roster order on ties.
#[must_use]
pub fn lowest_team(teams: &[Team]) -> Option<&Team> {
    teams.iter().fold(None, |best: Option<&Team>, team| match best {
        Some(b) if b.score <= team.score => Some(b),
        _ => Some(team),
    })
}

/// Every team except `activator`, in roster order.
pub fn opponents(teams: &[Team], activator: TeamId) -> impl Iterator<Item = &Team> {
    teams.iter().filter(move |t| t.id != activator)
}

/// Pick a uniformly random team other than `activator`.
///
/// Returns `None` without drawing when there is no other team.
pub fn pick_opponent<'t, R: RandomSource + ?Sized>(
    teams: &'t [Team],
    activator: TeamId,
    rng: &mut R,
) -> Option<&'t Team> {
    let candidates: Vec<&Team> = opponents(teams, activator).collect();
    if candidates.is_empty() {
        return None;
    }
    let choice = rng.index(candidates.len());
    candidates.get(choice).copied()
}
