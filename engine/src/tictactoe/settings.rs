use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::error::ConfigError;
use super::difficulty::{DEFAULT_HARD_SEARCH_DEPTH, Difficulty, Strategy, TierScheme};

pub const MIN_HARD_SEARCH_DEPTH: usize = 1;
pub const MAX_HARD_SEARCH_DEPTH: usize = 8;

fn default_hard_search_depth() -> usize {
    DEFAULT_HARD_SEARCH_DEPTH
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tiers: TierScheme,
    #[serde(default = "default_hard_search_depth")]
    pub hard_search_depth: usize,
    /// Fixed RNG seed for reproducible Easy/Medium play.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            tiers: TierScheme::default(),
            hard_search_depth: DEFAULT_HARD_SEARCH_DEPTH,
            seed: None,
        }
    }
}

impl GameSettings {
    pub fn strategy(&self) -> Strategy {
        self.difficulty.strategy(self.tiers, self.hard_search_depth)
    }

    pub fn check_difficulty(&self, difficulty: Difficulty) -> Result<(), ConfigError> {
        if !self.tiers.supports(difficulty) {
            return Err(ConfigError::Validation(format!(
                "difficulty '{}' is not available with {:?} tiers",
                difficulty, self.tiers
            )));
        }
        Ok(())
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_HARD_SEARCH_DEPTH..=MAX_HARD_SEARCH_DEPTH).contains(&self.hard_search_depth) {
            return Err(ConfigError::Validation(format!(
                "hard_search_depth must be between {} and {}, got {}",
                MIN_HARD_SEARCH_DEPTH, MAX_HARD_SEARCH_DEPTH, self.hard_search_depth
            )));
        }
        self.check_difficulty(self.difficulty)
    }
}
