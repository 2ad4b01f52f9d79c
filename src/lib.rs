//! # rust-quizboard
//!
//! Engine for a grid-based team quiz game.
//!
//! Teams take turns revealing tiles that hide either a question or a
//! power-up. A correct answer pays the question's points; a power-up applies
//! a scripted score, rank or status manipulation across the roster.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: Every transition returns a new `GameSession`.
//!    Tiles live in an `im::Vector` and questions behind `Arc`, so a clone is
//!    cheap and undo is a stack of snapshots.
//!
//! 2. **Injected Randomness**: Grid building and power-up resolution draw
//!    from a `RandomSource`. Seeded `GameRng` for play, `SequenceRng` for
//!    scripted tests.
//!
//! 3. **Closed Catalog**: Power-ups are a closed enum resolved by one
//!    exhaustive `match`; the registry only carries display data and ranges.
//!
//! ## Modules
//!
//! - `core`: Teams, configuration, randomness, errors
//! - `content`: Questions and topics
//! - `powerups`: Power-up definitions and the registry
//! - `effects`: Effect types, targeting and the resolver
//! - `session`: Tiles, snapshots, the turn engine, the factory and the host
//!
//! ```
//! use quizboard::{GameHost, GameSetupConfig, Question, Topic};
//!
//! let topic = Topic::new("animals", "Animals")
//!     .with_question(Question::text("q1", "Largest land animal?", "Elephant", 10));
//! let config = GameSetupConfig::new("animals", 2).with_grid_size(1);
//!
//! let mut host = GameHost::seeded(7);
//! host.initialize_game(&config, topic).unwrap();
//! host.reveal_tile(0).unwrap();
//! let session = host.adjudicate(true).unwrap();
//!
//! assert_eq!(session.teams[0].score, 10);
//! assert!(session.is_finished());
//! ```

pub mod content;
pub mod core;
pub mod effects;
pub mod powerups;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, GameRngState, GameSetupConfig, RandomSource, Result, SequenceRng, Team,
    TeamId,
};

pub use crate::content::{Question, Topic};

pub use crate::powerups::{PowerUp, PowerUpCategory, PowerUpId, PowerUpRegistry};

pub use crate::effects::{EffectResolver, PowerUpEffect, StatusEffect, StatusKind};

pub use crate::session::{
    GameHost, GameSession, SessionFactory, SessionId, SessionStatus, Tile, TileContent,
    TurnEngine,
};
