//! Exhaustive minimax search
//!
//! The tree is searched to the end of the game at every call (at most 9
//! plies), with no pruning and no transposition table.
//!
//! Every child value is the recursive result *plus* the heuristic
//! [`score`] of the child position, at every level rather than only at the
//! leaves. Only the move completing a line ever scores non-zero, so a win
//! is worth `WIN + WIN` and a loss `LOSS + LOSS` wherever it happens in the
//! tree; the distance to the result is not rewarded.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Pos};
//! use tictactoe::search::Searcher;
//!
//! let board = Board::from_rows(["XX ", "OO ", "   "]).unwrap();
//! let result = Searcher::new().search(&board);
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! ```

use crate::board::{Board, Pos, AI_MARK, HUMAN_MARK};
use crate::eval::{score, DRAW, LOSS, WIN};
use crate::rules::{empty_cells, has_won, is_full};

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` on a full board
    pub best_move: Option<Pos>,
    /// Value of the best move from X's point of view
    pub score: i32,
    /// Positions visited by the recursive search
    pub nodes: u64,
}

/// Minimax searcher for X.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick X's move on `board`.
    ///
    /// Candidates are tried in row-major order and a later candidate only
    /// replaces the current best if its value is strictly greater, so the
    /// first of several equal moves wins. The caller's board is never
    /// modified; the chosen move is not applied.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let mut scratch = *board;

        let mut best_move = None;
        let mut best_score = i32::MIN;

        for pos in empty_cells(&scratch) {
            scratch.place(pos, AI_MARK);
            let value = self.minimax(&mut scratch, false) + score(&scratch);
            scratch.remove(pos);

            if value > best_score {
                best_score = value;
                best_move = Some(pos);
            }
        }
        debug_assert_eq!(scratch, *board);

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { DRAW },
            nodes: self.nodes,
        }
    }

    /// Value of `board` with X to move if `maximizing`, O otherwise.
    ///
    /// Terminal checks run in a fixed order: O line, X line, full board.
    /// Every tentative placement is undone before returning.
    pub fn minimax(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.nodes += 1;

        if has_won(board, HUMAN_MARK) {
            return LOSS;
        }
        if has_won(board, AI_MARK) {
            return WIN;
        }
        if is_full(board) {
            return DRAW;
        }

        let mark = if maximizing { AI_MARK } else { HUMAN_MARK };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in empty_cells(board) {
            board.place(pos, mark);
            let value = self.minimax(board, !maximizing) + score(board);
            board.remove(pos);

            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        best
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Value of `board` with X to move if `maximizing`, O otherwise.
///
/// Convenience wrapper over [`Searcher::minimax`].
pub fn minimax(board: &mut Board, maximizing: bool) -> i32 {
    Searcher::new().minimax(board, maximizing)
}
