use crate::debug_log;
use crate::error::GameError;
use super::board::Board;
use super::difficulty::{DEFAULT_HARD_SEARCH_DEPTH, Difficulty, Strategy, TierScheme};
use super::search::{SearchDepth, Searcher};
use super::session_rng::SessionRng;
use super::types::{ENGINE, Player};

/// Move for the engine side at `difficulty`, four-tier scheme, fresh entropy.
pub fn select_move(board: &Board, difficulty: Difficulty) -> Result<usize, GameError> {
    let strategy = difficulty.strategy(TierScheme::FourTier, DEFAULT_HARD_SEARCH_DEPTH);
    let mut rng = SessionRng::from_random();
    select_move_with(board, strategy, ENGINE, &mut rng)
}

/// Picks a move for `bot`. The board is only read; tentative placements are
/// made on a private copy.
pub fn select_move_with(
    board: &Board,
    strategy: Strategy,
    bot: Player,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    if board.legal_moves().is_empty() {
        return Err(GameError::NoLegalMove);
    }

    let mut scratch = *board;
    let index = match strategy {
        Strategy::Random => random_move(&scratch, rng)?,
        Strategy::Heuristic => heuristic_move(&mut scratch, bot, rng)?,
        Strategy::DepthLimited(limit) => {
            search_move(&mut scratch, bot, SearchDepth::Limited(limit), rng)?
        }
        Strategy::Exhaustive => search_move(&mut scratch, bot, SearchDepth::Exhaustive, rng)?,
    };

    debug_log!(
        "{} picked {} for {} on {}",
        strategy,
        index,
        bot,
        board.compact()
    );
    Ok(index)
}

pub fn random_move(board: &Board, rng: &mut SessionRng) -> Result<usize, GameError> {
    rng.pick(board.legal_moves().as_slice())
        .ok_or(GameError::NoLegalMove)
}

/// First legal cell, in ascending order, where `player` completes a line.
pub fn find_winning_move(board: &mut Board, player: Player) -> Option<usize> {
    for index in board.legal_moves() {
        let Ok(placed) = board.place(index, player) else {
            continue;
        };
        if placed.is_win(player.mark()) {
            return Some(placed.index());
        }
    }
    None
}

fn win_or_block(board: &mut Board, bot: Player) -> Option<usize> {
    find_winning_move(board, bot).or_else(|| find_winning_move(board, bot.other()))
}

fn heuristic_move(board: &mut Board, bot: Player, rng: &mut SessionRng) -> Result<usize, GameError> {
    match win_or_block(board, bot) {
        Some(index) => Ok(index),
        None => random_move(board, rng),
    }
}

fn search_move(
    board: &mut Board,
    bot: Player,
    depth: SearchDepth,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    if let Some(index) = win_or_block(board, bot) {
        return Ok(index);
    }

    let mut searcher = Searcher::new(bot, depth);
    let result = searcher.search(board);
    debug_log!(
        "search {:?} visited {} nodes, best {:?} scoring {}",
        depth,
        result.nodes,
        result.best_move,
        result.score
    );

    match result.best_move {
        Some(index) => Ok(index),
        None => random_move(board, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::types::{HUMAN, Mark};
    use crate::tictactoe::win_detector::evaluate_terminal;
    use crate::tictactoe::TerminalState;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn strategies() -> [Strategy; 4] {
        [
            Strategy::Random,
            Strategy::Heuristic,
            Strategy::DepthLimited(1),
            Strategy::Exhaustive,
        ]
    }

    #[test]
    fn test_every_tier_picks_a_legal_move() {
        let b = board("XOX OXO __X");
        let mut rng = SessionRng::new(3);
        for strategy in strategies() {
            let index = select_move_with(&b, strategy, ENGINE, &mut rng).unwrap();
            assert!(b.legal_moves().contains(index), "{} picked {}", strategy, index);
        }
        // X already holds 0-4-8, so the block scan stops at the first empty cell
        for difficulty in [Difficulty::Medium, Difficulty::Hard, Difficulty::Impossible] {
            assert_eq!(select_move(&b, difficulty), Ok(6));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board("XXO OOX XOX");
        let mut rng = SessionRng::new(1);
        for strategy in strategies() {
            assert_eq!(
                select_move_with(&b, strategy, ENGINE, &mut rng),
                Err(GameError::NoLegalMove)
            );
        }
        assert_eq!(random_move(&b, &mut rng), Err(GameError::NoLegalMove));
    }

    #[test]
    fn test_selection_leaves_board_untouched() {
        let b = board("X__ _O_ __X");
        let before = b;
        let mut rng = SessionRng::new(9);
        for strategy in strategies() {
            select_move_with(&b, strategy, ENGINE, &mut rng).unwrap();
            assert_eq!(b, before);
        }
    }

    #[test]
    fn test_heuristic_prefers_win_over_block() {
        let b = board("XX_ OO_ ___");
        let mut rng = SessionRng::new(5);
        assert_eq!(select_move_with(&b, Strategy::Heuristic, ENGINE, &mut rng), Ok(5));
    }

    #[test]
    fn test_heuristic_blocks_first_threat() {
        let mut rng = SessionRng::new(5);
        let b = board("XX_ _O_ ___");
        assert_eq!(select_move_with(&b, Strategy::Heuristic, ENGINE, &mut rng), Ok(2));
        // two open threats: the lower index is blocked
        let b = board("XXO _X_ O__");
        assert_eq!(select_move_with(&b, Strategy::Heuristic, ENGINE, &mut rng), Ok(7));
    }

    #[test]
    fn test_find_winning_move_restores_board() {
        let mut b = board("OO_ XX_ X__");
        let before = b;
        assert_eq!(find_winning_move(&mut b, Player::O), Some(2));
        // 2 also completes X's 2-4-6 diagonal and comes first
        assert_eq!(find_winning_move(&mut b, Player::X), Some(2));
        assert_eq!(b, before);
        assert_eq!(find_winning_move(&mut Board::new(), Player::O), None);
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let b = Board::new();
        let picks = |seed| {
            let mut rng = SessionRng::new(seed);
            (0..20)
                .map(|_| select_move_with(&b, Strategy::Random, ENGINE, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn test_hard_falls_for_fork() {
        let mut rng = SessionRng::new(0);
        let mut b = Board::new();
        let mut replies = Vec::new();
        for x_move in [0, 4, 6] {
            b.apply_move(x_move, HUMAN).unwrap();
            let reply = select_move_with(&b, Strategy::DepthLimited(1), ENGINE, &mut rng).unwrap();
            b.apply_move(reply, ENGINE).unwrap();
            replies.push(reply);
        }
        assert_eq!(replies, vec![1, 8, 2]);

        b.apply_move(3, HUMAN).unwrap();
        assert_eq!(evaluate_terminal(&b), TerminalState::Win(Mark::X));
    }

    #[test]
    fn test_impossible_opening_replies() {
        let mut rng = SessionRng::new(0);
        let expected = [4, 0, 4, 0, 0, 2, 4, 1, 4];
        for (x_move, reply) in expected.into_iter().enumerate() {
            let mut b = Board::new();
            b.apply_move(x_move, HUMAN).unwrap();
            assert_eq!(
                select_move_with(&b, Strategy::Exhaustive, ENGINE, &mut rng),
                Ok(reply),
                "reply to X at {}",
                x_move
            );
        }
    }

    #[derive(Default)]
    struct Tally {
        x_wins: usize,
        o_wins: usize,
        draws: usize,
    }

    fn play_every_x_line(b: &mut Board, rng: &mut SessionRng, tally: &mut Tally) {
        for x_move in b.legal_moves() {
            let mut after_x = *b;
            after_x.apply_move(x_move, Player::X).unwrap();
            match evaluate_terminal(&after_x) {
                TerminalState::Win(_) => {
                    tally.x_wins += 1;
                    continue;
                }
                TerminalState::Draw => {
                    tally.draws += 1;
                    continue;
                }
                TerminalState::Ongoing => {}
            }

            let reply = select_move_with(&after_x, Strategy::Exhaustive, ENGINE, rng).unwrap();
            after_x.apply_move(reply, Player::O).unwrap();
            match evaluate_terminal(&after_x) {
                TerminalState::Win(_) => tally.o_wins += 1,
                TerminalState::Draw => tally.draws += 1,
                TerminalState::Ongoing => play_every_x_line(&mut after_x, rng, tally),
            }
        }
    }

    #[test]
    fn test_impossible_never_loses() {
        let mut rng = SessionRng::new(0);
        let mut tally = Tally::default();
        play_every_x_line(&mut Board::new(), &mut rng, &mut tally);

        assert_eq!(tally.x_wins, 0);
        assert_eq!(tally.o_wins, 386);
        assert_eq!(tally.draws, 183);
    }

    #[test]
    fn test_impossible_self_play_draws() {
        let mut rng = SessionRng::new(0);
        let mut b = Board::new();
        let mut side = Player::X;
        while !evaluate_terminal(&b).is_over() {
            let index = select_move_with(&b, Strategy::Exhaustive, side, &mut rng).unwrap();
            b.apply_move(index, side).unwrap();
            side = side.other();
        }
        assert_eq!(evaluate_terminal(&b), TerminalState::Draw);
        assert_eq!(b, board("XXO OOX XOX"));
    }

    #[test]
    fn test_empty_board_move_is_optimal() {
        let b = Board::new();
        let index = select_move(&b, Difficulty::Impossible).unwrap();
        let mut scratch = b;
        let scores = Searcher::new(ENGINE, SearchDepth::Exhaustive).score_moves(&mut scratch);
        let best = scores.iter().map(|&(_, score)| score).max().unwrap();
        assert!(scores.contains(&(index, best)));
    }
}
