use std::fmt;

pub const CELL_COUNT: usize = 9;
pub const SIDE: usize = 3;

/// The human always plays X and moves first; the engine answers with O.
pub const HUMAN: Player = Player::X;
pub const ENGINE: Player = Player::O;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_symbol(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '_' | '.' | '-' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A side of the game. Unlike `Mark` it can never be empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Mark {
        player.mark()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalState {
    Win(Mark),
    Draw,
    Ongoing,
}

impl TerminalState {
    pub fn is_over(&self) -> bool {
        !matches!(self, TerminalState::Ongoing)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            TerminalState::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalState::Win(mark) => write!(f, "{} wins", mark),
            TerminalState::Draw => write!(f, "draw"),
            TerminalState::Ongoing => write!(f, "in progress"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}
