//! Team identification and per-team scoring state.
//!
//! ## TeamId
//!
//! Type-safe team identifier supporting up to 255 teams. The id doubles as the
//! team's position in the session roster, which is also the turn order.
//!
//! ## Team
//!
//! Name, score and recorded status effects. Scores are unsigned: applying a
//! negative delta saturates at zero, so a score can never go negative.

use serde::{Deserialize, Serialize};

use crate::effects::StatusEffect;

/// Maximum number of teams in one session.
pub const MAX_TEAMS: usize = u8::MAX as usize;

/// Team identifier.
///
/// Team indices are 0-based: the first team is `TeamId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all team IDs for a game with `team_count` teams.
    ///
    /// ```
    /// use quizboard::core::TeamId;
    ///
    /// let teams: Vec<_> = TeamId::all(3).collect();
    /// assert_eq!(teams, vec![TeamId::new(0), TeamId::new(1), TeamId::new(2)]);
    /// ```
    pub fn all(team_count: usize) -> impl Iterator<Item = TeamId> {
        (0..team_count.min(MAX_TEAMS) as u8).map(TeamId)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.index() + 1)
    }
}

/// A team taking part in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Roster position and identity.
    pub id: TeamId,
    /// Display name.
    pub name: String,
    /// Current score.
    pub score: u32,
    /// Status effects applied by power-ups, oldest first.
    pub statuses: Vec<StatusEffect>,
}

impl Team {
    /// Create a team with a zero score.
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            statuses: Vec::new(),
        }
    }

    /// Set the starting score.
    #[must_use]
    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    /// Default display name for the team at `id`.
    #[must_use]
    pub fn default_name(id: TeamId) -> String {
        id.to_string()
    }

    /// Apply a signed delta, saturating at zero.
    ///
    /// Returns the delta that was actually applied.
    pub fn apply_delta(&mut self, delta: i64) -> i64 {
        let before = i64::from(self.score);
        let after = (before + delta).clamp(0, i64::from(u32::MAX));
        self.score = after as u32;
        after - before
    }

    /// Does this team currently hold a status that blocks point payouts?
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.statuses.iter().any(StatusEffect::blocks_points)
    }

    /// Product of all active point multipliers (1 when none apply).
    #[must_use]
    pub fn payout_multiplier(&self) -> u32 {
        self.statuses
            .iter()
            .filter_map(StatusEffect::multiplier)
            .fold(1u32, u32::saturating_mul)
    }

    /// Consume one turn of every status in the first `active` entries.
    ///
    /// Statuses appended after that prefix (applied during the current turn)
    /// are left untouched. Expired statuses are removed.
    pub fn tick_statuses(&mut self, active: usize) {
        let active = active.min(self.statuses.len());
        for status in &mut self.statuses[..active] {
            status.duration = status.duration.saturating_sub(1);
        }
        self.statuses.retain(|s| s.duration > 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::StatusKind;

    #[test]
    fn test_team_id_basics() {
        let t0 = TeamId::new(0);
        let t1 = TeamId::new(1);

        assert_eq!(t0.index(), 0);
        assert_eq!(t1.index(), 1);
        assert_eq!(format!("{}", t0), "Team 1");
        assert_eq!(Team::default_name(t1), "Team 2");
    }

    #[test]
    fn test_team_id_all() {
        let teams: Vec<_> = TeamId::all(4).collect();
        assert_eq!(teams.len(), 4);
        assert_eq!(teams[3], TeamId::new(3));
    }

    #[test]
    fn test_apply_delta_saturates() {
        let mut team = Team::new(TeamId::new(0), "A").with_score(10);

        assert_eq!(team.apply_delta(15), 15);
        assert_eq!(team.score, 25);

        assert_eq!(team.apply_delta(-40), -25);
        assert_eq!(team.score, 0);
    }

    #[test]
    fn test_status_queries() {
        let mut team = Team::new(TeamId::new(0), "A");
        assert!(!team.is_blocked());
        assert_eq!(team.payout_multiplier(), 1);

        team.statuses.push(StatusEffect::no_points(1));
        team.statuses.push(StatusEffect::points_multiplier(2, 2));
        team.statuses.push(StatusEffect::points_multiplier(3, 1));

        assert!(team.is_blocked());
        assert_eq!(team.payout_multiplier(), 6);
    }

    #[test]
    fn test_tick_statuses_leaves_new_entries() {
        let mut team = Team::new(TeamId::new(0), "A");
        team.statuses.push(StatusEffect::no_points(1));
        team.statuses.push(StatusEffect::points_multiplier(2, 2));
        // Applied this turn
        team.statuses.push(StatusEffect::no_points(1));

        team.tick_statuses(2);

        assert_eq!(team.statuses.len(), 2);
        assert_eq!(team.statuses[0].kind, StatusKind::PointsMultiplier { multiplier: 2 });
        assert_eq!(team.statuses[0].duration, 1);
        assert_eq!(team.statuses[1].kind, StatusKind::NoPoints);
    }

    #[test]
    fn test_team_serialization() {
        let team = Team::new(TeamId::new(2), "Owls").with_score(40);
        let json = serde_json::to_string(&team).unwrap();
        let deserialized: Team = serde_json::from_str(&json).unwrap();
        assert_eq!(team, deserialized);
    }
}
