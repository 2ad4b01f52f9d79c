//! Power-up registry for definition lookup.
//!
//! The `PowerUpRegistry` stores the power-up catalog. `standard()` builds
//! the full catalog the game ships with; custom registries are mostly
//! useful in tests.

use rustc_hash::FxHashMap;

use super::definition::{EffectShape, EffectType, PowerUp, PowerUpCategory, PowerUpId};
use crate::core::{GameError, Result};

/// Registry of power-up definitions.
///
/// ## Example
///
/// ```
/// use quizboard::powerups::{PowerUpId, PowerUpRegistry};
///
/// let registry = PowerUpRegistry::standard();
/// let gold = registry.get(PowerUpId::Gold).unwrap();
/// assert_eq!(gold.effect.min_points, Some(50));
///
/// assert!(registry.lookup("unicorn").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PowerUpRegistry {
    power_ups: FxHashMap<PowerUpId, PowerUp>,
}

impl PowerUpRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full catalog.
    #[must_use]
    pub fn standard() -> Self {
        use EffectType::{Rank, Status};
        use PowerUpCategory::{Manipulative, Negative, Positive};

        let mut registry = Self::new();
        let entries = [
            (PowerUpId::Fairy, "Fairy", Positive, EffectShape::points(10, 30)),
            (PowerUpId::Magnet, "Magnet", Positive, EffectShape::points(5, 20)),
            (PowerUpId::Rocket, "Rocket", Positive, EffectShape::of(Rank)),
            (PowerUpId::Star, "Star", Positive, EffectShape::of(EffectType::Points)),
            (PowerUpId::Gold, "Gold", Positive, EffectShape::points(50, 50)),
            (PowerUpId::Gift, "Gift", Positive, EffectShape::points(5, 25)),
            (PowerUpId::Ghost, "Ghost", Positive, EffectShape::points(5, 25)),
            (PowerUpId::Thief, "Thief", Negative, EffectShape::points(5, 25)),
            (PowerUpId::Heart, "Heart", Negative, EffectShape::points(5, 25)),
            (PowerUpId::Lifesaver, "Lifesaver", Negative, EffectShape::points(5, 25)),
            (PowerUpId::Banana, "Banana", Negative, EffectShape::of(Rank)),
            (PowerUpId::Eraser, "Eraser", Negative, EffectShape::of(EffectType::Points)),
            (PowerUpId::Virus, "Virus", Manipulative, EffectShape::of(EffectType::Points)),
            (PowerUpId::Shark, "Shark", Manipulative, EffectShape::points(5, 25)),
            (PowerUpId::Boom, "Boom", Negative, EffectShape::points(50, 50)),
            (PowerUpId::Baam, "Baam", Negative, EffectShape::points(5, 25)),
            (PowerUpId::Crocodile, "Crocodile", Negative, EffectShape::of(Status)),
            (PowerUpId::Trap, "Trap", Negative, EffectShape::of(Status)),
            (PowerUpId::Seesaw, "Seesaw", Manipulative, EffectShape::of(EffectType::Points)),
        ];

        for (id, name, category, effect) in entries {
            registry.register(PowerUp::new(id, name, category, effect));
        }
        registry
    }

    /// Register a power-up definition.
    ///
    /// Panics if a power-up with the same ID already exists.
    pub fn register(&mut self, power_up: PowerUp) {
        if self.power_ups.contains_key(&power_up.id) {
            panic!("Power-up {} already registered", power_up.id);
        }
        self.power_ups.insert(power_up.id, power_up);
    }

    /// Get a power-up definition by ID.
    pub fn get(&self, id: PowerUpId) -> Result<&PowerUp> {
        self.power_ups
            .get(&id)
            .ok_or_else(|| GameError::UnknownPowerUp { id: id.to_string() })
    }

    /// Get a power-up definition by its textual id.
    pub fn lookup(&self, name: &str) -> Result<&PowerUp> {
        self.get(name.parse()?)
    }

    /// Check if a power-up ID is registered.
    #[must_use]
    pub fn contains(&self, id: PowerUpId) -> bool {
        self.power_ups.contains_key(&id)
    }

    /// Get the number of registered power-ups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.power_ups.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.power_ups.is_empty()
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &PowerUp> {
        self.power_ups.values()
    }

    /// Find power-ups by category.
    pub fn find_by_category(&self, category: PowerUpCategory) -> impl Iterator<Item = &PowerUp> {
        self.power_ups.values().filter(move |p| p.category == category)
    }
}
