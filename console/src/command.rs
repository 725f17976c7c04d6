use tictactoe_engine::tictactoe::{CELL_COUNT, Difficulty, ParseDifficultyError};

/// One line of player input. Cells are numbered 1-9 on screen and 0-8 inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Restart,
    SetDifficulty(Difficulty),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("cell {0} does not exist, pick 1 to 9")]
    NoSuchCell(usize),

    #[error("'d' needs a level: easy, medium, hard or impossible")]
    MissingDifficulty,

    #[error(transparent)]
    UnknownDifficulty(#[from] ParseDifficultyError),

    #[error("unknown command '{0}', type h for help")]
    Unknown(String),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(CommandError::Unknown(String::new()));
    };

    if let Ok(cell) = head.parse::<usize>() {
        if !(1..=CELL_COUNT).contains(&cell) {
            return Err(CommandError::NoSuchCell(cell));
        }
        return Ok(Command::Place(cell - 1));
    }

    match head.to_ascii_lowercase().as_str() {
        "r" | "restart" => Ok(Command::Restart),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "d" | "difficulty" => {
            let level = words.next().ok_or(CommandError::MissingDifficulty)?;
            Ok(Command::SetDifficulty(level.parse()?))
        }
        _ => Err(CommandError::Unknown(head.to_string())),
    }
}

pub const HELP: &str = "\
Commands:
  1-9           place your X (cells are numbered left to right, top to bottom)
  r             start a new game
  d <level>     switch difficulty: easy, medium, hard, impossible
  h             show this help
  q             quit";
