use tictactoe_engine::tictactoe::{
    Board, ENGINE, HUMAN, Mark, MoveReport, SIDE, TerminalState, WinningLine,
};

/// The board as shown to the player: empty cells carry their 1-9 number.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..SIDE {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = (0..SIDE)
            .map(|col| {
                let index = row * SIDE + col;
                match board.get(index) {
                    Some(Mark::Empty) | None => (index + 1).to_string(),
                    Some(mark) => mark.to_string(),
                }
            })
            .collect();
        out.push_str(&format!(" {} | {} | {}\n", cells[0], cells[1], cells[2]));
    }
    out
}

fn describe_line(line: &WinningLine) -> String {
    let cells: Vec<String> = line.cells.iter().map(|i| (i + 1).to_string()).collect();
    cells.join("-")
}

pub fn outcome_message(outcome: TerminalState, line: Option<&WinningLine>) -> String {
    let line = line.map(describe_line).unwrap_or_default();
    match outcome.winner() {
        Some(mark) if mark == HUMAN.mark() => format!("You win on {}!", line),
        Some(mark) if mark == ENGINE.mark() => format!("The engine wins on {}.", line),
        Some(mark) => format!("{} wins.", mark),
        None if outcome.is_over() => "It's a draw.".to_string(),
        None => String::new(),
    }
}

pub fn report_move(report: &MoveReport) -> String {
    let who = if report.player == HUMAN { "You" } else { "Engine" };
    let mut out = format!(
        "{} ({}) took {}\n{}",
        who,
        report.player,
        report.index + 1,
        render_board(&report.board)
    );
    if report.is_game_over() {
        out.push_str(&outcome_message(report.outcome, report.winning_line.as_ref()));
        out.push_str("\nNew game, you move first.\n");
    }
    out
}
