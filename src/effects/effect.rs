//! Effect definitions.
//!
//! Effects are the atomic outcome of resolving a power-up: a signed score
//! delta on one team, or a status recorded on one team. A single activation
//! produces an ordered list of them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::TeamId;

/// Ordered effects of one activation.
///
/// Most activations produce at most two entries (a transfer); virus produces
/// one per team, which spills to the heap only for large rosters.
pub type EffectList = SmallVec<[PowerUpEffect; 4]>;

/// Kind of status a power-up can leave on a team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Correct answers pay nothing while active.
    NoPoints,
    /// Correct answers pay `multiplier` times their value while active.
    PointsMultiplier {
        multiplier: u32,
    },
}

/// A status with a remaining duration, counted in the team's own turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusEffect {
    /// What the status does.
    pub kind: StatusKind,
    /// Remaining turns.
    pub duration: u32,
}

impl StatusEffect {
    /// A payout block lasting `duration` turns.
    #[must_use]
    pub const fn no_points(duration: u32) -> Self {
        Self {
            kind: StatusKind::NoPoints,
            duration,
        }
    }

    /// A payout multiplier lasting `duration` turns.
    #[must_use]
    pub const fn points_multiplier(multiplier: u32, duration: u32) -> Self {
        Self {
            kind: StatusKind::PointsMultiplier { multiplier },
            duration,
        }
    }

    /// Does this status block payouts?
    #[must_use]
    pub fn blocks_points(&self) -> bool {
        self.kind == StatusKind::NoPoints
    }

    /// The multiplier, if this is a multiplier status.
    #[must_use]
    pub fn multiplier(&self) -> Option<u32> {
        match self.kind {
            StatusKind::PointsMultiplier { multiplier } => Some(multiplier),
            StatusKind::NoPoints => None,
        }
    }
}

/// One atomic result of resolving a power-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUpEffect {
    /// Signed delta applied to `source_team`'s score.
    ///
    /// `target_team` names the counterparty of a transfer, if any.
    Points {
        source_team: TeamId,
        target_team: Option<TeamId>,
        points: i64,
    },

    /// Status recorded on `source_team`.
    Status {
        source_team: TeamId,
        status: StatusEffect,
    },
}

impl PowerUpEffect {
    /// A score delta on `team`.
    #[must_use]
    pub fn points(team: TeamId, points: i64) -> Self {
        Self::Points {
            source_team: team,
            target_team: None,
            points,
        }
    }

    /// A score delta on `team` with `counterparty` as the other side.
    #[must_use]
    pub fn transfer(team: TeamId, counterparty: TeamId, points: i64) -> Self {
        Self::Points {
            source_team: team,
            target_team: Some(counterparty),
            points,
        }
    }

    /// A status on `team`.
    #[must_use]
    pub fn status(team: TeamId, status: StatusEffect) -> Self {
        Self::Status {
            source_team: team,
            status,
        }
    }

    /// Team the effect applies to.
    #[must_use]
    pub fn team(&self) -> TeamId {
        match self {
            Self::Points { source_team, .. } | Self::Status { source_team, .. } => *source_team,
        }
    }

    /// Score delta carried by this effect (0 for statuses).
    #[must_use]
    pub fn delta(&self) -> i64 {
        match self {
            Self::Points { points, .. } => *points,
            Self::Status { .. } => 0,
        }
    }
}
