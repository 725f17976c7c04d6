use crate::config::Validate;
use crate::error::{ConfigError, GameError};
use crate::{debug_log, log};
use super::board::Board;
use super::bot_controller::select_move_with;
use super::difficulty::Difficulty;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::types::{ENGINE, HUMAN, Player, TerminalState, WinningLine};

/// What one move did. `board` is the position right after the move; when
/// `outcome` is terminal the session has already been reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub index: usize,
    pub player: Player,
    pub board: Board,
    pub outcome: TerminalState,
    pub winning_line: Option<WinningLine>,
}

impl MoveReport {
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_over()
    }
}

/// One human-versus-engine game at a time. The human plays X and always
/// opens; a finished game immediately makes way for a fresh board.
pub struct GameSession {
    board: Board,
    turn: Player,
    settings: GameSettings,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(settings: GameSettings) -> Result<Self, ConfigError> {
        let rng = SessionRng::from_seed_or_random(settings.seed);
        Self::with_rng(settings, rng)
    }

    pub fn with_rng(settings: GameSettings, rng: SessionRng) -> Result<Self, ConfigError> {
        settings.validate()?;
        log!(
            "New session: difficulty {}, {}, seed {}",
            settings.difficulty,
            settings.strategy(),
            rng.seed()
        );
        Ok(Self {
            board: Board::new(),
            turn: HUMAN,
            settings,
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_player_turn(&self) -> bool {
        self.turn == HUMAN
    }

    /// Switching difficulty abandons the game in progress.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), ConfigError> {
        self.settings.check_difficulty(difficulty)?;
        self.settings.difficulty = difficulty;
        log!(
            "Difficulty set to {} ({})",
            difficulty,
            self.settings.strategy()
        );
        self.restart();
        Ok(())
    }

    pub fn restart(&mut self) {
        self.board = Board::new();
        self.turn = HUMAN;
        debug_log!("Board reset, {} to move", self.turn);
    }

    pub fn play(&mut self, index: usize) -> Result<MoveReport, GameError> {
        self.expect_turn(HUMAN)?;
        self.board.apply_move(index, HUMAN)?;
        Ok(self.finish_move(index, HUMAN))
    }

    /// Computes the engine's reply without applying it.
    pub fn choose_response(&mut self) -> Result<usize, GameError> {
        self.expect_turn(ENGINE)?;
        select_move_with(&self.board, self.settings.strategy(), ENGINE, &mut self.rng)
    }

    pub fn commit_response(&mut self, index: usize) -> Result<MoveReport, GameError> {
        self.expect_turn(ENGINE)?;
        self.board.apply_move(index, ENGINE)?;
        Ok(self.finish_move(index, ENGINE))
    }

    pub fn respond(&mut self) -> Result<MoveReport, GameError> {
        let index = self.choose_response()?;
        self.commit_response(index)
    }

    fn expect_turn(&self, player: Player) -> Result<(), GameError> {
        if self.turn != player {
            return Err(GameError::OutOfTurn(player));
        }
        Ok(())
    }

    fn finish_move(&mut self, index: usize, player: Player) -> MoveReport {
        let report = MoveReport {
            index,
            player,
            board: self.board,
            outcome: self.board.terminal_state(),
            winning_line: self.board.winning_line(),
        };
        debug_log!("{} took {}: {}", player, index, self.board.compact());

        if report.is_game_over() {
            log!(
                "Game over at {}: {} ({})",
                self.settings.difficulty,
                report.outcome,
                report.board.compact()
            );
            self.restart();
        } else {
            self.turn = player.other();
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::difficulty::TierScheme;
    use crate::tictactoe::types::Mark;

    fn session(difficulty: Difficulty) -> GameSession {
        let settings = GameSettings {
            difficulty,
            ..GameSettings::default()
        };
        GameSession::with_rng(settings, SessionRng::new(17)).unwrap()
    }

    #[test]
    fn test_new_session_waits_for_player() {
        let s = session(Difficulty::Medium);
        assert!(s.board().is_empty());
        assert!(s.is_player_turn());
        assert_eq!(s.seed(), 17);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let settings = GameSettings {
            hard_search_depth: 0,
            ..GameSettings::default()
        };
        assert!(GameSession::new(settings).is_err());
    }

    #[test]
    fn test_play_then_respond() {
        let mut s = session(Difficulty::Impossible);
        let report = s.play(0).unwrap();
        assert_eq!(report.player, Player::X);
        assert_eq!(report.outcome, TerminalState::Ongoing);
        assert_eq!(s.turn(), ENGINE);

        let report = s.respond().unwrap();
        assert_eq!(report.index, 4);
        assert_eq!(report.player, Player::O);
        assert_eq!(s.board().get(4), Some(Mark::O));
        assert!(s.is_player_turn());
    }

    #[test]
    fn test_moves_out_of_turn_fail() {
        let mut s = session(Difficulty::Easy);
        assert_eq!(s.choose_response(), Err(GameError::OutOfTurn(ENGINE)));
        assert_eq!(s.commit_response(0), Err(GameError::OutOfTurn(ENGINE)));

        s.play(0).unwrap();
        assert_eq!(s.play(1), Err(GameError::OutOfTurn(HUMAN)));
    }

    #[test]
    fn test_invalid_player_move_keeps_turn() {
        let mut s = session(Difficulty::Impossible);
        s.play(0).unwrap();
        s.respond().unwrap();
        assert_eq!(s.play(4), Err(GameError::occupied(4)));
        assert_eq!(s.play(9), Err(GameError::out_of_range(9)));
        assert!(s.is_player_turn());
        assert_eq!(s.board().count(Mark::Empty), 7);
    }

    #[test]
    fn test_choose_response_does_not_apply() {
        let mut s = session(Difficulty::Hard);
        s.play(0).unwrap();
        let index = s.choose_response().unwrap();
        assert_eq!(s.board().get(index), Some(Mark::Empty));
        assert_eq!(s.turn(), ENGINE);
        let report = s.commit_response(index).unwrap();
        assert_eq!(report.index, index);
    }

    #[test]
    fn test_player_win_resets_board() {
        let mut s = session(Difficulty::Hard);
        for index in [0, 4, 6] {
            s.play(index).unwrap();
            s.respond().unwrap();
        }
        let report = s.play(3).unwrap();
        assert_eq!(report.outcome, TerminalState::Win(Mark::X));
        assert_eq!(report.winning_line.map(|line| line.cells), Some([0, 3, 6]));
        assert_eq!(report.board.count(Mark::X), 4);
        assert!(s.board().is_empty());
        assert!(s.is_player_turn());
    }

    #[test]
    fn test_draw_resets_board() {
        let mut s = session(Difficulty::Impossible);
        let mut replies = Vec::new();
        for index in [0, 1, 6, 5] {
            s.play(index).unwrap();
            replies.push(s.respond().unwrap().index);
        }
        assert_eq!(replies, vec![4, 2, 3, 7]);

        let report = s.play(8).unwrap();
        assert_eq!(report.outcome, TerminalState::Draw);
        assert_eq!(report.winning_line, None);
        assert_eq!(report.board, "XXO OOX XOX".parse().unwrap());
        assert!(s.board().is_empty());
    }

    #[test]
    fn test_set_difficulty_resets() {
        let mut s = session(Difficulty::Easy);
        s.play(4).unwrap();
        s.set_difficulty(Difficulty::Impossible).unwrap();
        assert_eq!(s.difficulty(), Difficulty::Impossible);
        assert!(s.board().is_empty());
        assert!(s.is_player_turn());
    }

    #[test]
    fn test_three_tier_session_rejects_impossible() {
        let settings = GameSettings {
            difficulty: Difficulty::Hard,
            tiers: TierScheme::ThreeTier,
            ..GameSettings::default()
        };
        let mut s = GameSession::with_rng(settings, SessionRng::new(1)).unwrap();
        s.play(4).unwrap();
        assert!(s.set_difficulty(Difficulty::Impossible).is_err());
        assert_eq!(s.difficulty(), Difficulty::Hard);
        // the rejected change leaves the game alone
        assert_eq!(s.turn(), ENGINE);
    }

    #[test]
    fn test_restart_mid_game() {
        let mut s = session(Difficulty::Medium);
        s.play(2).unwrap();
        s.respond().unwrap();
        s.restart();
        assert!(s.board().is_empty());
        assert!(s.is_player_turn());
    }
}
