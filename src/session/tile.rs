//! Grid tiles.
//!
//! A tile hides either a question or a power-up. The content is fixed when
//! the grid is built; revealing is write-once, so a revealed tile keeps its
//! content, its revealing team and its outcome for the rest of the session.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::content::Question;
use crate::core::TeamId;
use crate::powerups::PowerUpId;

/// What a tile hides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileContent {
    /// A question from the topic pool.
    Question(Arc<Question>),
    /// A power-up activated by whoever reveals the tile.
    PowerUp(PowerUpId),
}

impl TileContent {
    /// The question, if this is a question tile.
    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Question(q) => Some(q.as_ref()),
            Self::PowerUp(_) => None,
        }
    }

    /// The power-up, if this is a power-up tile.
    #[must_use]
    pub fn power_up(&self) -> Option<PowerUpId> {
        match self {
            Self::PowerUp(id) => Some(*id),
            Self::Question(_) => None,
        }
    }
}

/// One cell of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Position on the board, `0..grid_size`.
    pub id: usize,
    /// Number printed on the tile (1-based).
    pub display_number: usize,
    /// Hidden content.
    pub content: TileContent,
    /// Has the tile been resolved?
    pub is_revealed: bool,
    /// Team whose turn resolved the tile.
    pub revealed_by: Option<TeamId>,
    /// Outcome of a question tile. `None` for power-ups and unrevealed tiles.
    pub answered_correctly: Option<bool>,
}

impl Tile {
    /// Create an unrevealed tile at board position `id`.
    #[must_use]
    pub fn new(id: usize, content: TileContent) -> Self {
        Self {
            id,
            display_number: id + 1,
            content,
            is_revealed: false,
            revealed_by: None,
            answered_correctly: None,
        }
    }

    /// Is this a power-up tile?
    #[must_use]
    pub fn is_power_up(&self) -> bool {
        matches!(self.content, TileContent::PowerUp(_))
    }

    /// Mark the tile as resolved by `team`.
    ///
    /// Returns `false` and changes nothing if it was already revealed.
    pub fn reveal(&mut self, team: TeamId, answered_correctly: Option<bool>) -> bool {
        if self.is_revealed {
            return false;
        }
        self.is_revealed = true;
        self.revealed_by = Some(team);
        self.answered_correctly = answered_correctly;
        true
    }
}
