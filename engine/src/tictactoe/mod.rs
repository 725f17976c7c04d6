mod board;
mod bot_controller;
mod difficulty;
mod search;
mod session;
mod session_rng;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, LegalMoves, ParseBoardError, Placement, apply_player_move};
pub use bot_controller::{find_winning_move, random_move, select_move, select_move_with};
pub use difficulty::{DEFAULT_HARD_SEARCH_DEPTH, Difficulty, ParseDifficultyError, Strategy, TierScheme};
pub use search::{SearchDepth, SearchResult, Searcher, WIN_SCORE};
pub use session::{GameSession, MoveReport};
pub use session_rng::SessionRng;
pub use settings::{GameSettings, MAX_HARD_SEARCH_DEPTH, MIN_HARD_SEARCH_DEPTH};
pub use types::{CELL_COUNT, ENGINE, HUMAN, Mark, Player, SIDE, TerminalState, WinningLine};
pub use win_detector::{WIN_COMBINATIONS, check_win_with_line, evaluate_terminal, is_draw, is_win};
