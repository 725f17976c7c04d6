use tictactoe_engine::GameError;
use tictactoe_engine::tictactoe::{
    Board, GameSettings, Mark, Player, SearchDepth, Searcher, SessionRng, select_move_with,
};

use crate::render::{outcome_message, render_board};

/// X opens, so equal counts mean X is to move.
fn side_to_move(board: &Board) -> Player {
    if board.count(Mark::X) > board.count(Mark::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Text report for `--board`: exact score of every legal move for the side
/// to move, then the pick of each available difficulty.
pub fn analyze(board: &Board, settings: &GameSettings) -> Result<String, GameError> {
    let mut out = render_board(board);

    let outcome = board.terminal_state();
    if outcome.is_over() {
        out.push_str(&outcome_message(outcome, board.winning_line().as_ref()));
        out.push('\n');
        return Ok(out);
    }

    let side = side_to_move(board);
    let mut searcher = Searcher::new(side, SearchDepth::Exhaustive);
    let mut scratch = *board;
    let scores = searcher.score_moves(&mut scratch);

    out.push_str(&format!(
        "{} to move, exact scores ({} nodes):\n",
        side,
        searcher.nodes()
    ));
    for (index, score) in scores {
        out.push_str(&format!("  cell {}: {:+}\n", index + 1, score));
    }

    let mut rng = SessionRng::from_seed_or_random(settings.seed);
    for &difficulty in settings.tiers.levels() {
        let strategy = difficulty.strategy(settings.tiers, settings.hard_search_depth);
        let index = select_move_with(board, strategy, side, &mut rng)?;
        out.push_str(&format!(
            "  {:<10} ({}) plays {}\n",
            difficulty,
            strategy,
            index + 1
        ));
    }
    Ok(out)
}
