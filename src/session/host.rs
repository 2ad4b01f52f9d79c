//! In-process game host.
//!
//! `GameHost` owns "the current session": the registry, the session
//! factory, the random source and the snapshot history used by `undo`.
//! Every operation returns the snapshot it produced so a UI can re-render
//! straight from the return value.
//!
//! The host is single-threaded. A multi-client front end wraps it in one
//! mutex.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::engine::TurnEngine;
use super::factory::SessionFactory;
use super::state::{GameSession, SessionId};
use crate::content::Topic;
use crate::core::{GameError, GameRng, GameSetupConfig, RandomSource, Result};
use crate::powerups::PowerUpRegistry;

/// Owner of the current session.
#[derive(Debug)]
pub struct GameHost<R: RandomSource = GameRng> {
    registry: PowerUpRegistry,
    factory: SessionFactory,
    rng: R,
    session: Option<GameSession>,
    history: Vec<GameSession>,
}

impl GameHost<GameRng> {
    /// Host with the standard catalog and a seeded ChaCha8 source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(PowerUpRegistry::standard(), GameRng::new(seed))
    }
}

impl<R: RandomSource> GameHost<R> {
    /// Host with a custom registry and random source.
    #[must_use]
    pub fn new(registry: PowerUpRegistry, rng: R) -> Self {
        Self {
            registry,
            factory: SessionFactory::new(),
            rng,
            session: None,
            history: Vec::new(),
        }
    }

    /// The power-up catalog.
    #[must_use]
    pub fn registry(&self) -> &PowerUpRegistry {
        &self.registry
    }

    /// The random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Current snapshot, if a game is running.
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Start a new game, replacing any current one.
    ///
    /// # Errors
    ///
    /// Configuration errors from the factory. The current session (if any)
    /// is kept when creation fails.
    #[instrument(skip_all, fields(topic = %topic.id))]
    pub fn initialize_game(&mut self, config: &GameSetupConfig, topic: Topic) -> Result<SessionId> {
        let session = self
            .factory
            .create(Arc::new(topic), config, &self.registry, &mut self.rng)?;
        let id = session.id;

        if let Some(previous) = self.session.replace(session) {
            info!(previous = %previous.id, session = %id, "Replaced running session");
        }
        self.history.clear();
        Ok(id)
    }

    /// Reveal a tile.
    #[instrument(skip(self))]
    pub fn reveal_tile(&mut self, tile_id: usize) -> Result<GameSession> {
        let current = self.current()?;
        let next = TurnEngine::new(&self.registry).reveal_tile(current, tile_id);
        Ok(self.commit(next))
    }

    /// Hide the revealed content without resolving the tile.
    #[instrument(skip(self))]
    pub fn close_active_interaction(&mut self) -> Result<GameSession> {
        let current = self.current()?;
        let next = TurnEngine::new(&self.registry).close_active_interaction(current);
        Ok(self.commit(next))
    }

    /// Resolve the tile in flight.
    ///
    /// # Errors
    ///
    /// `NoActiveSession`, or an integrity error from power-up resolution. On
    /// error the current snapshot is unchanged.
    #[instrument(skip(self))]
    pub fn adjudicate(&mut self, correct: bool) -> Result<GameSession> {
        let current = self.session.as_ref().ok_or(GameError::NoActiveSession)?;
        let next = TurnEngine::new(&self.registry).adjudicate(current, correct, &mut self.rng)?;
        Ok(self.commit(next))
    }

    /// Finish the game now.
    #[instrument(skip(self))]
    pub fn end_game(&mut self) -> Result<GameSession> {
        let current = self.current()?;
        let next = TurnEngine::new(&self.registry).end_game(current);
        Ok(self.commit(next))
    }

    /// Is there a snapshot to go back to?
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Restore the previous snapshot.
    ///
    /// Random draws already taken are not rewound.
    ///
    /// # Errors
    ///
    /// `NoActiveSession` when no game is running.
    pub fn undo(&mut self) -> Result<Option<GameSession>> {
        if self.session.is_none() {
            return Err(GameError::NoActiveSession);
        }
        let Some(previous) = self.history.pop() else {
            debug!("Nothing to undo");
            return Ok(None);
        };
        debug!(session = %previous.id, depth = self.history.len(), "Undo");
        self.session = Some(previous.clone());
        Ok(Some(previous))
    }

    /// Drop the current session and its history.
    pub fn discard(&mut self) -> Option<GameSession> {
        self.history.clear();
        let dropped = self.session.take();
        if let Some(session) = &dropped {
            info!(session = %session.id, "Discarded session");
        }
        dropped
    }

    fn current(&self) -> Result<&GameSession> {
        self.session.as_ref().ok_or(GameError::NoActiveSession)
    }

    /// Install `next` as current, remembering the old snapshot if it changed.
    fn commit(&mut self, next: GameSession) -> GameSession {
        if let Some(previous) = self.session.replace(next.clone()) {
            if previous != next {
                self.history.push(previous);
            }
        }
        next
    }
}
