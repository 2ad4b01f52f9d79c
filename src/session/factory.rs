//! Session construction.
//!
//! The factory validates a `GameSetupConfig` against the supplied topic and
//! registry, then builds the initial snapshot: teams at zero, a shuffled
//! board, turn index 0, status `InProgress`.
//!
//! Draws happen in a fixed order: the pool shuffle first, then per tile a
//! power-up coin flip followed (on success) by the power-up pick.

use std::sync::Arc;

use im::Vector;
use tracing::{debug, info, instrument, warn};

use super::state::{GameSession, SessionId, SessionStatus};
use super::tile::{Tile, TileContent};
use crate::content::{Question, Topic};
use crate::core::{GameError, GameSetupConfig, RandomSource, Result, Team, TeamId, MAX_TEAMS};
use crate::powerups::PowerUpRegistry;

/// Builds sessions and hands out sequential ids.
#[derive(Clone, Debug, Default)]
pub struct SessionFactory {
    next_id: u64,
}

impl SessionFactory {
    /// Create a factory whose first session is `Session(0)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next successful `create` will assign.
    #[must_use]
    pub fn peek_next_id(&self) -> SessionId {
        SessionId::new(self.next_id)
    }

    /// Validate `config` and build the initial session.
    ///
    /// A failed validation consumes neither an id nor any random draws.
    ///
    /// # Errors
    ///
    /// Returns the first configuration problem found, checked in this order:
    /// grid size, team count, topic id, question pool, power-up probability,
    /// enabled power-ups.
    #[instrument(skip_all, fields(topic = %config.topic_id, teams = config.number_of_teams))]
    pub fn create<R: RandomSource + ?Sized>(
        &mut self,
        topic: impl Into<Arc<Topic>>,
        config: &GameSetupConfig,
        registry: &PowerUpRegistry,
        rng: &mut R,
    ) -> Result<GameSession> {
        let topic = topic.into();
        validate(&topic, config, registry)?;

        if config.team_names.len() > config.number_of_teams {
            warn!(
                names = config.team_names.len(),
                teams = config.number_of_teams,
                "Ignoring surplus team names"
            );
        }

        let teams: Vec<Team> = TeamId::all(config.number_of_teams)
            .map(|id| Team::new(id, config.team_name(id.index())))
            .collect();

        let mut pool: Vec<Arc<Question>> = topic.questions.clone();
        rng.shuffle(&mut pool);
        if pool.len() < config.grid_size {
            debug!(
                pool = pool.len(),
                grid_size = config.grid_size,
                "Reusing questions to fill the grid"
            );
        }

        let tiles = build_tiles(&pool, config, rng);
        let power_up_tiles = tiles.iter().filter(|t| t.is_power_up()).count();

        let id = SessionId::new(self.next_id);
        self.next_id += 1;

        info!(
            session = %id,
            grid_size = config.grid_size,
            power_up_tiles,
            "Created session"
        );

        Ok(GameSession {
            id,
            topic,
            teams,
            grid_size: config.grid_size,
            tiles,
            current_team_turn_index: 0,
            status: SessionStatus::InProgress,
            active_question: None,
            current_tile_id: None,
            enabled_power_ups: config.enabled_power_ups.clone(),
            power_up_probability: config.power_up_probability,
            consume_status_effects: config.consume_status_effects,
            adjudicated: 0,
            last_outcome: None,
        })
    }
}

fn validate(topic: &Topic, config: &GameSetupConfig, registry: &PowerUpRegistry) -> Result<()> {
    if config.grid_size == 0 {
        return Err(GameError::InvalidGridSize {
            grid_size: config.grid_size,
        });
    }
    if config.number_of_teams < 2 {
        return Err(GameError::TooFewTeams {
            team_count: config.number_of_teams,
        });
    }
    if config.number_of_teams > MAX_TEAMS {
        return Err(GameError::TooManyTeams {
            team_count: config.number_of_teams,
            max: MAX_TEAMS,
        });
    }
    if config.topic_id != topic.id {
        return Err(GameError::TopicMismatch {
            expected: config.topic_id.clone(),
            actual: topic.id.clone(),
        });
    }
    if topic.is_empty() {
        return Err(GameError::InsufficientQuestions {
            topic_id: topic.id.clone(),
        });
    }
    let p = config.power_up_probability;
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(GameError::InvalidProbability { probability: p });
    }
    for &id in &config.enabled_power_ups {
        registry.get(id)?;
    }
    Ok(())
}

/// Lay out `grid_size` tiles, cycling through the shuffled pool.
fn build_tiles<R: RandomSource + ?Sized>(
    pool: &[Arc<Question>],
    config: &GameSetupConfig,
    rng: &mut R,
) -> Vector<Tile> {
    let enabled = &config.enabled_power_ups;
    (0..config.grid_size)
        .map(|i| {
            let power_up = if enabled.is_empty() || !rng.chance(config.power_up_probability) {
                None
            } else {
                enabled.get(rng.index(enabled.len())).copied()
            };
            let content = match power_up {
                Some(id) => TileContent::PowerUp(id),
                None => TileContent::Question(Arc::clone(&pool[i % pool.len()])),
            };
            Tile::new(i, content)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequenceRng;
    use crate::powerups::PowerUpId;

    fn topic(n: usize) -> Topic {
        Topic::new("animals", "Animals").with_questions(
            (0..n).map(|i| Question::text(format!("q{i}"), "?", "!", 10 * (i as u32 + 1))),
        )
    }

    #[test]
    fn test_create_defaults() {
        let registry = PowerUpRegistry::standard();
        let mut factory = SessionFactory::new();
        let mut rng = SequenceRng::new([0.0]);
        let config = GameSetupConfig::new("animals", 3)
            .with_team_names(["Owls", "  ", "Foxes"])
            .with_grid_size(4);

        let s = factory.create(topic(4), &config, &registry, &mut rng).unwrap();

        assert_eq!(s.id, SessionId::new(0));
        assert_eq!(s.status, SessionStatus::InProgress);
        assert_eq!(s.tiles.len(), 4);
        assert_eq!(s.current_team_turn_index, 0);
        let names: Vec<_> = s.teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Owls", "Team 2", "Foxes"]);
        assert!(s.teams.iter().all(|t| t.score == 0));
        assert!(s.tiles.iter().all(|t| !t.is_power_up() && !t.is_revealed));
        assert_eq!(factory.peek_next_id(), SessionId::new(1));
    }

    #[test]
    fn test_questions_cycle() {
        let registry = PowerUpRegistry::standard();
        let mut factory = SessionFactory::new();
        // Only 0.99 samples: the shuffle of two questions keeps order.
        let mut rng = SequenceRng::new([0.99]);
        let config = GameSetupConfig::new("animals", 2).with_grid_size(5);

        let s = factory.create(topic(2), &config, &registry, &mut rng).unwrap();
        let ids: Vec<_> = s
            .tiles
            .iter()
            .map(|t| t.content.question().unwrap().id.clone())
            .collect();
        assert_eq!(ids, vec!["q0", "q1", "q0", "q1", "q0"]);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_power_up_placement() {
        let registry = PowerUpRegistry::standard();
        let mut factory = SessionFactory::new();
        // shuffle (1 draw), then per tile: chance, [index].
        let mut rng = SequenceRng::new([0.0, 0.1, 0.9, 0.9, 0.4, 0.1]);
        let config = GameSetupConfig::new("animals", 2)
            .with_grid_size(3)
            .with_power_ups([PowerUpId::Star, PowerUpId::Gold])
            .with_power_up_probability(0.5);

        let s = factory.create(topic(2), &config, &registry, &mut rng).unwrap();
        assert_eq!(s.tiles[0].content.power_up(), Some(PowerUpId::Gold));
        assert!(s.tiles[1].content.question().is_some());
        assert_eq!(s.tiles[2].content.power_up(), Some(PowerUpId::Star));
        assert_eq!(rng.draws(), 6);
    }

    #[test]
    fn test_probability_one_fills_board() {
        let registry = PowerUpRegistry::standard();
        let mut factory = SessionFactory::new();
        let mut rng = SequenceRng::new([0.3, 0.7]);
        let config = GameSetupConfig::new("animals", 2)
            .with_grid_size(6)
            .with_power_ups([PowerUpId::Virus])
            .with_power_up_probability(1.0);

        let s = factory.create(topic(1), &config, &registry, &mut rng).unwrap();
        assert!(s.tiles.iter().all(Tile::is_power_up));
    }

    #[test]
    fn test_validation_errors() {
        let registry = PowerUpRegistry::standard();
        let mut factory = SessionFactory::new();
        let mut rng = SequenceRng::new([0.5]);
        let base = GameSetupConfig::new("animals", 2).with_grid_size(4);

        let err = factory
            .create(topic(3), &base.clone().with_grid_size(0), &registry, &mut rng)
            .unwrap_err();
        assert_eq!(err, GameError::InvalidGridSize { grid_size: 0 });

        let mut one_team = base.clone();
        one_team.number_of_teams = 1;
        let err = factory.create(topic(3), &one_team, &registry, &mut rng).unwrap_err();
        assert_eq!(err, GameError::TooFewTeams { team_count: 1 });

        let mut crowd = base.clone();
        crowd.number_of_teams = 300;
        let err = factory.create(topic(3), &crowd, &registry, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::TooManyTeams { team_count: 300, .. }));

        let err = factory
            .create(Topic::new("plants", "Plants"), &base, &registry, &mut rng)
            .unwrap_err();
        assert!(matches!(err, GameError::TopicMismatch { .. }));

        let err = factory.create(topic(0), &base, &registry, &mut rng).unwrap_err();
        assert_eq!(err, GameError::InsufficientQuestions { topic_id: "animals".into() });

        for p in [-0.1, 1.5, f64::NAN] {
            let config = base.clone().with_power_up_probability(p);
            let err = factory.create(topic(3), &config, &registry, &mut rng).unwrap_err();
            assert!(matches!(err, GameError::InvalidProbability { .. }));
        }

        let sparse = PowerUpRegistry::new();
        let config = base.clone().with_power_ups([PowerUpId::Shark]);
        let err = factory.create(topic(3), &config, &sparse, &mut rng).unwrap_err();
        assert_eq!(err, GameError::UnknownPowerUp { id: "shark".into() });

        // Nothing consumed by the failures above.
        assert_eq!(rng.draws(), 0);
        assert_eq!(factory.peek_next_id(), SessionId::new(0));
    }

    #[test]
    fn test_sequential_ids() {
        let registry = PowerUpRegistry::standard();
        let mut factory = SessionFactory::new();
        let mut rng = SequenceRng::new([0.5]);
        let config = GameSetupConfig::new("animals", 2).with_grid_size(2);

        let shared = Arc::new(topic(2));
        let a = factory.create(Arc::clone(&shared), &config, &registry, &mut rng).unwrap();
        let b = factory.create(Arc::clone(&shared), &config, &registry, &mut rng).unwrap();
        assert_eq!(a.id, SessionId::new(0));
        assert_eq!(b.id, SessionId::new(1));
        assert!(Arc::ptr_eq(&a.topic, &b.topic));
    }
}
