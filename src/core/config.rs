//! Game setup configuration.
//!
//! The setup form supplies a `GameSetupConfig`; the session factory
//! validates it against a topic. Field names serialize in camelCase to
//! match what the form posts.
//!
//! Power-up ids are a closed enum, but they arrive as text from an
//! untrusted form. `with_power_up_names` and `from_json` both surface an
//! unknown id as a `GameError` rather than panicking.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::powerups::PowerUpId;

/// Default probability that an eligible tile hides a power-up.
pub const DEFAULT_POWER_UP_PROBABILITY: f64 = 0.2;

/// Default grid size.
pub const DEFAULT_GRID_SIZE: usize = 20;

/// Session setup configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSetupConfig {
    /// Topic the questions come from.
    pub topic_id: String,

    /// Number of teams playing.
    pub number_of_teams: usize,

    /// Team names in turn order. Missing or blank entries get `Team N`.
    #[serde(default)]
    pub team_names: Vec<String>,

    /// Number of tiles on the board.
    pub grid_size: usize,

    /// Power-ups that may appear on the board.
    #[serde(default)]
    pub enabled_power_ups: Vec<PowerUpId>,

    /// Per-tile probability of a power-up, in `[0, 1]`.
    #[serde(default = "default_probability")]
    pub power_up_probability: f64,

    /// Whether recorded status effects alter later payouts.
    #[serde(default)]
    pub consume_status_effects: bool,
}

fn default_probability() -> f64 {
    DEFAULT_POWER_UP_PROBABILITY
}

impl GameSetupConfig {
    /// Create a configuration for `number_of_teams` teams on `topic_id`.
    pub fn new(topic_id: impl Into<String>, number_of_teams: usize) -> Self {
        Self {
            topic_id: topic_id.into(),
            number_of_teams,
            team_names: Vec::new(),
            grid_size: DEFAULT_GRID_SIZE,
            enabled_power_ups: Vec::new(),
            power_up_probability: DEFAULT_POWER_UP_PROBABILITY,
            consume_status_effects: false,
        }
    }

    /// Parse a configuration posted by the setup form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Set the team names.
    #[must_use]
    pub fn with_team_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.team_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the grid size.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the enabled power-ups.
    #[must_use]
    pub fn with_power_ups(mut self, power_ups: impl IntoIterator<Item = PowerUpId>) -> Self {
        self.enabled_power_ups = power_ups.into_iter().collect();
        self
    }

    /// Set the enabled power-ups from their textual ids.
    pub fn with_power_up_names<'a>(
        mut self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        self.enabled_power_ups = names
            .into_iter()
            .map(str::parse::<PowerUpId>)
            .collect::<Result<Vec<PowerUpId>>>()?;
        Ok(self)
    }

    /// Set the per-tile power-up probability.
    #[must_use]
    pub fn with_power_up_probability(mut self, probability: f64) -> Self {
        self.power_up_probability = probability;
        self
    }

    /// Enable consumption of status effects on later turns.
    #[must_use]
    pub fn consuming_status_effects(mut self) -> Self {
        self.consume_status_effects = true;
        self
    }

    /// Resolved display name for the team at `index` (0-based).
    #[must_use]
    pub fn team_name(&self, index: usize) -> String {
        match self.team_names.get(index).map(|n| n.trim()) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Team {}", index + 1),
        }
    }
}
