use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::error::GameError;
use super::types::{CELL_COUNT, HUMAN, Mark, Player, SIDE, TerminalState, WinningLine};
use super::win_detector;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count(Mark::Empty) == CELL_COUNT
    }

    /// Empty cells in ascending index order. The order is what makes
    /// tie-breaking between equally scored moves deterministic.
    pub fn legal_moves(&self) -> LegalMoves {
        let mut moves = LegalMoves::default();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }

    /// Puts `player`'s mark on an empty cell. Clearing a cell is `undo_move`.
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::out_of_range(index))?;
        if *cell != Mark::Empty {
            return Err(GameError::occupied(index));
        }
        *cell = player.mark();
        Ok(())
    }

    pub fn undo_move(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Mark::Empty;
        }
    }

    /// Places `player`'s mark for the lifetime of the returned guard; the
    /// cell is cleared again when the guard drops, on every exit path.
    pub fn place(&mut self, index: usize, player: Player) -> Result<Placement<'_>, GameError> {
        self.apply_move(index, player)?;
        Ok(Placement { board: self, index })
    }

    pub fn is_win(&self, mark: Mark) -> bool {
        win_detector::is_win(self, mark)
    }

    pub fn is_draw(&self) -> bool {
        win_detector::is_draw(self)
    }

    pub fn terminal_state(&self) -> TerminalState {
        win_detector::evaluate_terminal(self)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        win_detector::check_win_with_line(self)
    }

    /// One-line form, e.g. `XO_/_X_/__O`.
    pub fn compact(&self) -> String {
        let mut out = String::with_capacity(CELL_COUNT + SIDE - 1);
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 && index % SIDE == 0 {
                out.push('/');
            }
            out.push(cell.symbol());
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let cell = |col: usize| match self.cells[row * SIDE + col] {
                Mark::Empty => ' ',
                mark => mark.symbol(),
            };
            writeln!(f, " {} | {} | {}", cell(0), cell(1), cell(2))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("unexpected character '{0}' in board")]
    UnexpectedChar(char),

    #[error("board needs exactly 9 cells, got {0}")]
    WrongCellCount(usize),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Accepts `X`, `O` and `_`/`.`/`-` for empty cells. Whitespace, `|`,
    /// `/` and `,` are separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() || matches!(c, '|' | '/' | ',') {
                continue;
            }
            let mark = Mark::from_symbol(c).ok_or(ParseBoardError::UnexpectedChar(c))?;
            if count < CELL_COUNT {
                cells[count] = mark;
            }
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(ParseBoardError::WrongCellCount(count));
        }
        Ok(Self { cells })
    }
}

/// Returns a copy of `board` with the human's mark at `index`.
pub fn apply_player_move(board: &Board, index: usize) -> Result<Board, GameError> {
    let mut next = *board;
    next.apply_move(index, HUMAN)?;
    Ok(next)
}

/// A move applied to a borrowed board, undone on drop.
pub struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Placement<'_> {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.index);
    }
}

/// Fixed-capacity list of empty cell indices; no allocation per search node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegalMoves {
    moves: [usize; CELL_COUNT],
    len: usize,
}

impl LegalMoves {
    fn push(&mut self, index: usize) {
        self.moves[self.len] = index;
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.moves[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.as_slice().contains(&index)
    }

}

impl IntoIterator for LegalMoves {
    type Item = usize;
    type IntoIter = std::iter::Take<std::array::IntoIter<usize, CELL_COUNT>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter().take(self.len)
    }
}
