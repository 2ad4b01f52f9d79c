//! Session snapshots.
//!
//! ## GameSession
//!
//! The single source of truth for one game: roster, board, turn pointer,
//! lifecycle status and the in-flight interaction. Engine operations never
//! mutate a snapshot; they return the next one.
//!
//! Tiles live in an `im::Vector` and questions behind `Arc`, so cloning a
//! snapshot is O(1) in the board size. That keeps the host's undo history
//! cheap.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileContent};
use crate::content::Topic;
use crate::core::{GameError, Result, Team, TeamId};
use crate::effects::PowerUpEffect;
use crate::powerups::PowerUpId;

/// Session identifier, assigned by the factory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Create a new session ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Session lifecycle.
///
/// `SettingUp` only exists while the factory builds the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    SettingUp,
    InProgress,
    Finished,
}

/// What happened when a tile was adjudicated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// A question was answered.
    Answered {
        correct: bool,
        points_awarded: u32,
    },
    /// A power-up was activated.
    PowerUp {
        power_up: PowerUpId,
        effects: Vec<PowerUpEffect>,
    },
}

/// The most recent adjudication, kept for the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileOutcome {
    /// Adjudicated tile.
    pub tile_id: usize,
    /// Team whose turn it was.
    pub team: TeamId,
    /// Result.
    pub kind: OutcomeKind,
}

/// One immutable snapshot of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// Identifier.
    pub id: SessionId,
    /// Topic the questions came from.
    pub topic: Arc<Topic>,
    /// Teams in turn order.
    pub teams: Vec<Team>,
    /// Number of tiles.
    pub grid_size: usize,
    /// The board.
    pub tiles: Vector<Tile>,
    /// Index into `teams` of the team to play.
    pub current_team_turn_index: usize,
    /// Lifecycle status.
    pub status: SessionStatus,
    /// Content of the revealed tile, while it is shown.
    pub active_question: Option<TileContent>,
    /// Tile awaiting adjudication.
    pub current_tile_id: Option<usize>,
    /// Power-ups that could appear on the board.
    pub enabled_power_ups: Vec<PowerUpId>,
    /// Per-tile power-up probability the board was built with.
    pub power_up_probability: f64,
    /// Whether statuses alter later payouts.
    pub consume_status_effects: bool,
    /// Number of tiles adjudicated so far.
    pub adjudicated: usize,
    /// Result of the latest adjudication.
    pub last_outcome: Option<TileOutcome>,
}

impl GameSession {
    /// Team whose turn it is.
    #[must_use]
    pub fn current_team(&self) -> Option<&Team> {
        self.teams.get(self.current_team_turn_index)
    }

    /// Team by id.
    #[must_use]
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Tile by id.
    #[must_use]
    pub fn tile(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// Tile awaiting adjudication.
    #[must_use]
    pub fn current_tile(&self) -> Option<&Tile> {
        self.current_tile_id.and_then(|id| self.tiles.get(id))
    }

    /// Number of tiles not yet revealed.
    #[must_use]
    pub fn remaining_tiles(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_revealed).count()
    }

    /// Is the game over?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == SessionStatus::Finished
    }

    /// Teams by descending score; ties keep turn order.
    #[must_use]
    pub fn standings(&self) -> Vec<&Team> {
        let mut ranked: Vec<&Team> = self.teams.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Teams sharing the top score, once the game is finished.
    #[must_use]
    pub fn winners(&self) -> Vec<&Team> {
        if !self.is_finished() {
            return Vec::new();
        }
        let Some(top) = self.teams.iter().map(|t| t.score).max() else {
            return Vec::new();
        };
        self.teams.iter().filter(|t| t.score == top).collect()
    }

    /// Encode the snapshot for another process (renderer, replay log).
    pub fn encode(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| GameError::Snapshot {
            message: e.to_string(),
        })
    }

    /// Decode a snapshot produced by `encode`.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| GameError::Snapshot {
            message: e.to_string(),
        })
    }
}
