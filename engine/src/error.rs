/// Why a cell cannot take a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    Occupied,
    OutOfRange,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::Occupied => write!(f, "cell is already marked"),
            InvalidMoveReason::OutOfRange => write!(f, "index must be between 0 and 8"),
        }
    }
}

/// Errors surfaced by the board, the move selectors and the game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move at {index}: {reason}")]
    InvalidMove {
        index: usize,
        reason: InvalidMoveReason,
    },

    /// Move selection was requested on a full board. This is a sequencing
    /// bug on the caller's side: terminal state must be checked first.
    #[error("no legal move left on the board")]
    NoLegalMove,

    #[error("it is not {0}'s turn")]
    OutOfTurn(crate::tictactoe::Player),
}

impl GameError {
    pub fn occupied(index: usize) -> Self {
        GameError::InvalidMove {
            index,
            reason: InvalidMoveReason::Occupied,
        }
    }

    pub fn out_of_range(index: usize) -> Self {
        GameError::InvalidMove {
            index,
            reason: InvalidMoveReason::OutOfRange,
        }
    }
}

/// Errors raised while loading, validating or storing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(String),

    #[error("failed to deserialize config: {0}")]
    Deserialize(String),

    #[error("config validation error: {0}")]
    Validation(String),
}
