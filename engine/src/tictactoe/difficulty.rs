use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The Hard tier looks exactly one ply past the engine's own move.
pub const DEFAULT_HARD_SEARCH_DEPTH: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Impossible => "impossible",
        }
    }

    pub fn strategy(self, tiers: TierScheme, hard_search_depth: usize) -> Strategy {
        match (self, tiers) {
            (Difficulty::Easy, _) => Strategy::Random,
            (Difficulty::Medium, _) => Strategy::Heuristic,
            (Difficulty::Hard, TierScheme::FourTier) => Strategy::DepthLimited(hard_search_depth),
            (Difficulty::Hard, TierScheme::ThreeTier) | (Difficulty::Impossible, _) => {
                Strategy::Exhaustive
            }
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected easy, medium, hard or impossible)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseDifficultyError(wanted.to_string()))
    }
}

/// How many difficulty levels are offered. The three-tier scheme folds
/// Hard and Impossible into a single Hard level that searches to the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierScheme {
    #[default]
    FourTier,
    ThreeTier,
}

impl TierScheme {
    pub fn levels(self) -> &'static [Difficulty] {
        match self {
            TierScheme::FourTier => &Difficulty::ALL,
            TierScheme::ThreeTier => &Difficulty::ALL[..3],
        }
    }

    pub fn supports(self, difficulty: Difficulty) -> bool {
        self.levels().contains(&difficulty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Random,
    Heuristic,
    DepthLimited(usize),
    Exhaustive,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random => write!(f, "random"),
            Strategy::Heuristic => write!(f, "win/block heuristic"),
            Strategy::DepthLimited(limit) => write!(f, "minimax limited to depth {}", limit),
            Strategy::Exhaustive => write!(f, "exhaustive minimax"),
        }
    }
}
