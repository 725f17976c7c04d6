use super::board::Board;
use super::types::{Mark, TerminalState, WinningLine};

pub const WIN_COMBINATIONS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn find_line(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    if mark == Mark::Empty {
        return None;
    }
    WIN_COMBINATIONS
        .into_iter()
        .find(|combo| combo.iter().all(|&i| board.cells()[i] == mark))
}

pub fn is_win(board: &Board, mark: Mark) -> bool {
    find_line(board, mark).is_some()
}

/// True when no cell is empty. A full board can still hold a winning line,
/// so callers must rule out `is_win` first.
pub fn is_draw(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Mark::Empty)
}

/// O is checked before X, matching `evaluate_terminal`.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    [Mark::O, Mark::X]
        .into_iter()
        .find_map(|mark| find_line(board, mark).map(|cells| WinningLine::new(mark, cells)))
}

/// O win, then X win, then full board.
pub fn evaluate_terminal(board: &Board) -> TerminalState {
    if is_win(board, Mark::O) {
        return TerminalState::Win(Mark::O);
    }
    if is_win(board, Mark::X) {
        return TerminalState::Win(Mark::X);
    }
    if is_draw(board) {
        return TerminalState::Draw;
    }
    TerminalState::Ongoing
}
