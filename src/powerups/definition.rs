//! Power-up definitions - static power-up data.
//!
//! `PowerUpId` is a closed enum: every id the game knows about is listed
//! here, and the resolver matches on it exhaustively. `PowerUp` is the
//! read-only catalog entry (display name, category, effect shape).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Identifier of a power-up.
///
/// Serializes as the lowercase name used by the setup form (`"fairy"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUpId {
    Fairy,
    Magnet,
    Rocket,
    Star,
    Gold,
    Gift,
    Ghost,
    Thief,
    Heart,
    Lifesaver,
    Banana,
    Eraser,
    Virus,
    Shark,
    Boom,
    Baam,
    Crocodile,
    Trap,
    Seesaw,
}

impl PowerUpId {
    /// Every power-up, in catalog order.
    pub const ALL: [PowerUpId; 19] = [
        PowerUpId::Fairy,
        PowerUpId::Magnet,
        PowerUpId::Rocket,
        PowerUpId::Star,
        PowerUpId::Gold,
        PowerUpId::Gift,
        PowerUpId::Ghost,
        PowerUpId::Thief,
        PowerUpId::Heart,
        PowerUpId::Lifesaver,
        PowerUpId::Banana,
        PowerUpId::Eraser,
        PowerUpId::Virus,
        PowerUpId::Shark,
        PowerUpId::Boom,
        PowerUpId::Baam,
        PowerUpId::Crocodile,
        PowerUpId::Trap,
        PowerUpId::Seesaw,
    ];

    /// Textual id as used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PowerUpId::Fairy => "fairy",
            PowerUpId::Magnet => "magnet",
            PowerUpId::Rocket => "rocket",
            PowerUpId::Star => "star",
            PowerUpId::Gold => "gold",
            PowerUpId::Gift => "gift",
            PowerUpId::Ghost => "ghost",
            PowerUpId::Thief => "thief",
            PowerUpId::Heart => "heart",
            PowerUpId::Lifesaver => "lifesaver",
            PowerUpId::Banana => "banana",
            PowerUpId::Eraser => "eraser",
            PowerUpId::Virus => "virus",
            PowerUpId::Shark => "shark",
            PowerUpId::Boom => "boom",
            PowerUpId::Baam => "baam",
            PowerUpId::Crocodile => "crocodile",
            PowerUpId::Trap => "trap",
            PowerUpId::Seesaw => "seesaw",
        }
    }

    /// Does resolving this power-up require another team as target?
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(
            self,
            PowerUpId::Fairy
                | PowerUpId::Magnet
                | PowerUpId::Thief
                | PowerUpId::Heart
                | PowerUpId::Lifesaver
                | PowerUpId::Shark
                | PowerUpId::Seesaw
        )
    }
}

impl std::fmt::Display for PowerUpId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerUpId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PowerUpId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownPowerUp { id: s.to_string() })
    }
}

/// Broad effect on the activating team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUpCategory {
    /// Helps the activator.
    Positive,
    /// Hurts the activator.
    Negative,
    /// Reshuffles points between teams.
    Manipulative,
}

/// What part of the game state an effect changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectType {
    /// Score deltas.
    Points,
    /// Score deltas computed from the team ranking.
    Rank,
    /// A status recorded on the team, no score change.
    Status,
}

/// Effect shape: type plus the inclusive point range, when the effect draws one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectShape {
    /// What the effect changes.
    pub effect_type: EffectType,
    /// Lower bound of the drawn amount.
    pub min_points: Option<u32>,
    /// Upper bound of the drawn amount.
    pub max_points: Option<u32>,
}

impl EffectShape {
    /// Shape without a point range.
    #[must_use]
    pub const fn of(effect_type: EffectType) -> Self {
        Self {
            effect_type,
            min_points: None,
            max_points: None,
        }
    }

    /// Points shape drawing from `[min, max]`.
    #[must_use]
    pub const fn points(min: u32, max: u32) -> Self {
        Self {
            effect_type: EffectType::Points,
            min_points: Some(min),
            max_points: Some(max),
        }
    }

    /// The `[min, max]` range, falling back to `default` when unset.
    #[must_use]
    pub fn range_or(&self, default: (u32, u32)) -> (u32, u32) {
        (
            self.min_points.unwrap_or(default.0),
            self.max_points.unwrap_or(default.1),
        )
    }
}

/// Static power-up definition.
///
/// ## Example
///
/// ```
/// use quizboard::powerups::{EffectShape, PowerUp, PowerUpCategory, PowerUpId};
///
/// let gift = PowerUp::new(
///     PowerUpId::Gift,
///     "Gift",
///     PowerUpCategory::Positive,
///     EffectShape::points(5, 25),
/// );
/// assert_eq!(gift.effect.range_or((0, 0)), (5, 25));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUp {
    /// Unique identifier.
    pub id: PowerUpId,
    /// Display name.
    pub name: String,
    /// Broad category.
    pub category: PowerUpCategory,
    /// Effect shape.
    pub effect: EffectShape,
}

impl PowerUp {
    /// Create a new power-up definition.
    pub fn new(
        id: PowerUpId,
        name: impl Into<String>,
        category: PowerUpCategory,
        effect: EffectShape,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            effect,
        }
    }
}
