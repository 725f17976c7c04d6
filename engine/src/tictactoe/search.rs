use super::board::Board;
use super::types::Player;

/// Score of a win found at depth 0. Deeper wins are worth less, deeper
/// losses cost less, so the search prefers fast wins and slow losses.
pub const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDepth {
    /// Non-terminal positions at `depth >= limit` score 0.
    Limited(usize),
    Exhaustive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<usize>,
    pub nodes: u64,
}

/// Minimax from the point of view of `bot`: its wins score positive, the
/// other side's wins negative. One board is mutated in place and restored
/// through `Board::place` guards.
pub struct Searcher {
    bot: Player,
    depth: SearchDepth,
    nodes: u64,
}

impl Searcher {
    pub fn new(bot: Player, depth: SearchDepth) -> Self {
        Self {
            bot,
            depth,
            nodes: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn minimax(&mut self, board: &mut Board, depth: usize, is_maximizing: bool) -> i32 {
        self.nodes += 1;

        if board.is_win(self.bot.mark()) {
            return WIN_SCORE - depth as i32;
        }
        if board.is_win(self.bot.other().mark()) {
            return depth as i32 - WIN_SCORE;
        }
        if board.is_draw() {
            return 0;
        }
        if let SearchDepth::Limited(limit) = self.depth
            && depth >= limit
        {
            return 0;
        }

        let side = if is_maximizing { self.bot } else { self.bot.other() };
        let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

        for index in board.legal_moves() {
            let Ok(mut placed) = board.place(index, side) else {
                continue;
            };
            let eval = self.minimax(&mut placed, depth + 1, !is_maximizing);
            best = if is_maximizing { best.max(eval) } else { best.min(eval) };
        }

        best
    }

    /// Scores every legal move for `bot`, in ascending index order.
    pub fn score_moves(&mut self, board: &mut Board) -> Vec<(usize, i32)> {
        let mut scores = Vec::with_capacity(board.legal_moves().len());
        for index in board.legal_moves() {
            let Ok(mut placed) = board.place(index, self.bot) else {
                continue;
            };
            let score = self.minimax(&mut placed, 0, false);
            scores.push((index, score));
        }
        scores
    }

    /// Picks the first move with the strictly greatest score.
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        let mut best_score = i32::MIN;
        let mut best_move = None;

        for (index, score) in self.score_moves(board) {
            if score > best_score {
                best_score = score;
                best_move = Some(index);
            }
        }

        SearchResult {
            score: if best_move.is_some() { best_score } else { 0 },
            best_move,
            nodes: self.nodes,
        }
    }
}
