use std::io::Write;
use std::time::Duration;

use tictactoe_engine::log;
use tictactoe_engine::tictactoe::GameSession;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{Command, HELP, parse_command};
use crate::render::{render_board, report_move};

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

/// Reads commands from stdin until `q` or end of input. The session is held
/// across the thinking delay, so input typed meanwhile waits in the buffer.
pub async fn run_game(session: &mut GameSession, thinking_delay: Duration) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!(
        "Tic-tac-toe, difficulty {}. You are X and move first. Type h for help.",
        session.difficulty()
    );
    println!("{}", render_board(session.board()));
    prompt();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            prompt();
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Restart) => {
                session.restart();
                println!("New game.\n{}", render_board(session.board()));
            }
            Ok(Command::SetDifficulty(difficulty)) => match session.set_difficulty(difficulty) {
                Ok(()) => println!(
                    "Difficulty is now {}. New game.\n{}",
                    difficulty,
                    render_board(session.board())
                ),
                Err(e) => println!("{}", e),
            },
            Ok(Command::Place(index)) => match session.play(index) {
                Ok(report) => {
                    println!("{}", report_move(&report));
                    if !report.is_game_over() {
                        engine_turn(session, thinking_delay).await;
                    }
                }
                Err(e) => println!("{}", e),
            },
            Err(e) => println!("{}", e),
        }
        prompt();
    }

    println!();
    Ok(())
}

async fn engine_turn(session: &mut GameSession, thinking_delay: Duration) {
    let index = match session.choose_response() {
        Ok(index) => index,
        Err(e) => {
            log!("Engine could not move: {}", e);
            session.restart();
            return;
        }
    };

    if !thinking_delay.is_zero() {
        println!("Engine is thinking...");
        tokio::time::sleep(thinking_delay).await;
    }

    match session.commit_response(index) {
        Ok(report) => println!("{}", report_move(&report)),
        Err(e) => {
            log!("Engine move {} rejected: {}", index, e);
            session.restart();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::tictactoe::{Difficulty, GameSettings, Mark, SessionRng};

    #[tokio::test]
    async fn test_engine_turn_applies_reply() {
        let settings = GameSettings {
            difficulty: Difficulty::Impossible,
            ..GameSettings::default()
        };
        let mut session = GameSession::with_rng(settings, SessionRng::new(1)).unwrap();
        session.play(0).unwrap();

        engine_turn(&mut session, Duration::from_millis(5)).await;

        assert_eq!(session.board().get(4), Some(Mark::O));
        assert!(session.is_player_turn());
    }

    #[tokio::test]
    async fn test_engine_turn_out_of_turn_restarts() {
        let mut session = GameSession::with_rng(GameSettings::default(), SessionRng::new(1)).unwrap();
        session.play(4).unwrap();
        session.respond().unwrap();

        engine_turn(&mut session, Duration::ZERO).await;

        assert!(session.board().is_empty());
        assert!(session.is_player_turn());
    }
}
