//! Game sessions: the board, the turn engine and the host.
//!
//! ## Key Types
//!
//! - `Tile`: One cell of the board, hiding a question or a power-up
//! - `GameSession`: Immutable snapshot of a game
//! - `TurnEngine`: Reveal/adjudicate transitions between snapshots
//! - `SessionFactory`: Validates configuration and builds the first snapshot
//! - `GameHost`: Owns the current session, its history and the random source
//!
//! ## Lifecycle
//!
//! ```text
//! SessionFactory::create ──► InProgress ──(board cleared | end_game)──► Finished
//!                               │    ▲
//!                     reveal_tile    adjudicate
//!                               ▼    │
//!                           tile in flight
//! ```

pub mod engine;
pub mod factory;
pub mod host;
pub mod state;
pub mod tile;

pub use engine::TurnEngine;
pub use factory::SessionFactory;
pub use host::GameHost;
pub use state::{GameSession, OutcomeKind, SessionId, SessionStatus, TileOutcome};
pub use tile::{Tile, TileContent};
