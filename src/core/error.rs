//! Error types for session setup and power-up resolution.
//!
//! Only two kinds of failure escape the engine:
//! - configuration errors, raised by the session factory before a session exists
//! - integrity errors (unknown power-up or team ids), which indicate bad data upstream
//!
//! Transition precondition failures (double reveal, adjudicating with nothing
//! in flight) are not errors. The engine returns the unchanged snapshot.

use derive_more::{Display, Error};

use super::TeamId;

/// Errors raised by the quiz board engine.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum GameError {
    /// The grid must contain at least one tile.
    #[display("grid size must be at least 1 (got {grid_size})")]
    InvalidGridSize {
        /// Requested grid size.
        grid_size: usize,
    },

    /// A game needs at least two teams.
    #[display("at least 2 teams are required (got {team_count})")]
    TooFewTeams {
        /// Requested team count.
        team_count: usize,
    },

    /// Team ids are a single byte.
    #[display("at most {max} teams are supported (got {team_count})")]
    TooManyTeams {
        /// Requested team count.
        team_count: usize,
        /// Supported maximum.
        max: usize,
    },

    /// The topic has no questions to place on the grid.
    #[display("topic '{topic_id}' has no questions")]
    InsufficientQuestions {
        /// Topic that was supplied.
        topic_id: String,
    },

    /// Power-up probability outside `[0, 1]` or not finite.
    #[display("power-up probability must be within [0, 1] (got {probability})")]
    InvalidProbability {
        /// Requested probability.
        probability: f64,
    },

    /// The configuration names a different topic than the one supplied.
    #[display("configuration expects topic '{expected}' but got '{actual}'")]
    TopicMismatch {
        /// Topic id from the configuration.
        expected: String,
        /// Topic id of the supplied topic.
        actual: String,
    },

    /// The configuration could not be parsed.
    #[display("invalid configuration: {message}")]
    InvalidConfig {
        /// Parser message.
        message: String,
    },

    /// A power-up id that is not registered.
    #[display("unknown power-up '{id}'")]
    UnknownPowerUp {
        /// The offending id, as received.
        id: String,
    },

    /// A team id that is not part of the roster.
    #[display("unknown team {team}")]
    UnknownTeam {
        /// The offending id.
        team: TeamId,
    },

    /// Host operation issued before `initialize_game`.
    #[display("no active game session")]
    NoActiveSession,

    /// A snapshot could not be encoded or decoded.
    #[display("snapshot codec error: {message}")]
    Snapshot {
        /// Codec message.
        message: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    /// Is this a configuration error (raised before a session exists)?
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidGridSize { .. }
                | Self::TooFewTeams { .. }
                | Self::TooManyTeams { .. }
                | Self::InsufficientQuestions { .. }
                | Self::InvalidProbability { .. }
                | Self::TopicMismatch { .. }
                | Self::InvalidConfig { .. }
        )
    }
}
