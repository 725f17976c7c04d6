mod analysis;
mod command;
mod config;
mod render;
mod runner;

use std::time::Duration;

use clap::Parser;
use tictactoe_engine::config::Validate;
use tictactoe_engine::tictactoe::{Board, Difficulty, GameSession};
use tictactoe_engine::{log, logger};

use config::get_config_manager;

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe against the engine")]
struct Args {
    /// Config file, defaults to tictactoe_console.yaml next to the executable
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the random tiers
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    /// Print the engine's view of a position, e.g. "XO_/_X_/___", and exit
    #[arg(long)]
    board: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = get_config_manager(args.config.as_deref()).get_config()?;
    if let Some(difficulty) = args.difficulty {
        config.game.difficulty = difficulty;
    }
    if let Some(seed) = args.seed {
        config.game.seed = Some(seed);
    }
    if let Some(delay_ms) = args.delay_ms {
        config.thinking_delay_ms = delay_ms;
    }
    config.validate()?;

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "Console".to_string()))
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    if let Some(text) = args.board {
        let board: Board = text.parse()?;
        print!("{}", analysis::analyze(&board, &config.game)?);
        return Ok(());
    }

    let mut session = GameSession::new(config.game.clone())?;
    runner::run_game(&mut session, Duration::from_millis(config.thinking_delay_ms)).await?;

    log!("Bye");
    Ok(())
}
