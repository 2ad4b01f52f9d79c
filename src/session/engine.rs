//! Turn/tile state machine.
//!
//! Every transition takes a snapshot by reference and returns the next one.
//! A transition whose precondition does not hold returns an unchanged clone
//! and logs a warning; only integrity failures (an unknown power-up or team)
//! are errors.

use tracing::{debug, info, warn};

use super::state::{GameSession, OutcomeKind, SessionStatus, TileOutcome};
use super::tile::TileContent;
use crate::core::{GameError, RandomSource, Result, Team};
use crate::effects::EffectResolver;
use crate::powerups::PowerUpRegistry;

/// Drives a session from reveal to adjudication.
#[derive(Clone, Copy, Debug)]
pub struct TurnEngine<'a> {
    registry: &'a PowerUpRegistry,
}

impl<'a> TurnEngine<'a> {
    /// Create an engine resolving power-ups against `registry`.
    #[must_use]
    pub fn new(registry: &'a PowerUpRegistry) -> Self {
        Self { registry }
    }

    /// Expose the content of `tile_id` to the current team.
    ///
    /// Requires an in-progress session, an existing unrevealed tile and no
    /// other tile in flight.
    #[must_use]
    pub fn reveal_tile(&self, session: &GameSession, tile_id: usize) -> GameSession {
        if session.status != SessionStatus::InProgress {
            warn!(
                session = %session.id,
                tile_id,
                status = ?session.status,
                "Reveal outside of play"
            );
            return session.clone();
        }
        if let Some(current) = session.current_tile_id {
            warn!(session = %session.id, tile_id, current, "Another tile is in flight");
            return session.clone();
        }
        let Some(tile) = session.tiles.get(tile_id) else {
            warn!(session = %session.id, tile_id, "No such tile");
            return session.clone();
        };
        if tile.is_revealed {
            warn!(session = %session.id, tile_id, "Tile already revealed");
            return session.clone();
        }

        debug!(
            session = %session.id,
            tile_id,
            power_up = tile.is_power_up(),
            "Revealed tile"
        );

        let mut next = session.clone();
        next.active_question = Some(tile.content.clone());
        next.current_tile_id = Some(tile_id);
        next
    }

    /// Hide the revealed content; the tile stays in flight.
    #[must_use]
    pub fn close_active_interaction(&self, session: &GameSession) -> GameSession {
        let mut next = session.clone();
        next.active_question = None;
        next
    }

    /// Resolve the tile in flight and pass the turn.
    ///
    /// `correct` is the host's verdict for a question tile and is ignored for
    /// power-up tiles. Without a tile in flight this returns the unchanged
    /// session, so a repeated call is harmless.
    ///
    /// # Errors
    ///
    /// Fails when the tile's power-up is not registered or the current team
    /// is missing from the roster. The input snapshot is untouched.
    pub fn adjudicate<R: RandomSource + ?Sized>(
        &self,
        session: &GameSession,
        correct: bool,
        rng: &mut R,
    ) -> Result<GameSession> {
        let Some(tile_id) = session.current_tile_id else {
            warn!(session = %session.id, "Adjudicate with no tile in flight");
            return Ok(session.clone());
        };
        if session.status != SessionStatus::InProgress {
            warn!(
                session = %session.id,
                tile_id,
                status = ?session.status,
                "Adjudicate outside of play"
            );
            return Ok(session.clone());
        }
        let Some(tile) = session.tiles.get(tile_id) else {
            warn!(session = %session.id, tile_id, "Tile in flight is not on the board");
            return Ok(session.clone());
        };
        let Some(team) = session.teams.get(session.current_team_turn_index) else {
            warn!(
                session = %session.id,
                index = session.current_team_turn_index,
                "Turn index outside the roster"
            );
            return Ok(session.clone());
        };
        let team_id = team.id;
        let active_statuses = team.statuses.len();

        let mut next = session.clone();

        let (kind, answered_correctly) = match &tile.content {
            TileContent::Question(question) => {
                let points_awarded = if correct {
                    payout(team, question.points, session.consume_status_effects)
                } else {
                    0
                };
                let team = next
                    .teams
                    .get_mut(session.current_team_turn_index)
                    .ok_or(GameError::UnknownTeam { team: team_id })?;
                team.apply_delta(i64::from(points_awarded));
                (
                    OutcomeKind::Answered {
                        correct,
                        points_awarded,
                    },
                    Some(correct),
                )
            }
            TileContent::PowerUp(power_up) => {
                let resolver = EffectResolver::new(self.registry);
                let effects = resolver.resolve(*power_up, team_id, &session.teams, rng)?;
                EffectResolver::apply(&effects, &mut next.teams);
                (
                    OutcomeKind::PowerUp {
                        power_up: *power_up,
                        effects: effects.into_vec(),
                    },
                    None,
                )
            }
        };

        if session.consume_status_effects {
            if let Some(team) = next.teams.get_mut(session.current_team_turn_index) {
                team.tick_statuses(active_statuses);
            }
        }

        if let Some(tile) = next.tiles.get_mut(tile_id) {
            tile.reveal(team_id, answered_correctly);
        }

        next.current_team_turn_index = (session.current_team_turn_index + 1) % session.teams.len();
        next.adjudicated += 1;
        next.active_question = None;
        next.current_tile_id = None;

        debug!(
            session = %session.id,
            tile_id,
            team = %team_id,
            outcome = ?kind,
            next_team = next.current_team_turn_index,
            "Adjudicated tile"
        );

        next.last_outcome = Some(TileOutcome {
            tile_id,
            team: team_id,
            kind,
        });

        if next.tiles.iter().all(|t| t.is_revealed) {
            next.status = SessionStatus::Finished;
            info!(session = %session.id, adjudicated = next.adjudicated, "Board cleared");
        }

        Ok(next)
    }

    /// Force the session into `Finished`.
    #[must_use]
    pub fn end_game(&self, session: &GameSession) -> GameSession {
        let mut next = session.clone();
        next.status = SessionStatus::Finished;
        next.active_question = None;
        next.current_tile_id = None;
        info!(
            session = %session.id,
            remaining = session.remaining_tiles(),
            "Game ended"
        );
        next
    }
}

/// Points a correct answer is worth to `team`.
fn payout(team: &Team, points: u32, consume_status_effects: bool) -> u32 {
    if !consume_status_effects {
        return points;
    }
    if team.is_blocked() {
        return 0;
    }
    points.saturating_mul(team.payout_multiplier())
}
