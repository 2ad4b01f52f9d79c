//! Core engine types: teams, configuration, randomness, errors.
//!
//! These are the leaf building blocks shared by the registry, the effect
//! resolver and the session engine.

pub mod config;
pub mod error;
pub mod rng;
pub mod team;

pub use config::{GameSetupConfig, DEFAULT_GRID_SIZE, DEFAULT_POWER_UP_PROBABILITY};
pub use error::{GameError, Result};
pub use rng::{GameRng, GameRngState, RandomSource, SequenceRng};
pub use team::{Team, TeamId, MAX_TEAMS};
