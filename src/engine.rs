//! Main AI engine
//!
//! This is the entry point the presentation layer uses to get X's move.
//! The search follows a priority system:
//!
//! 1. **Immediate win**: the first empty cell, in row-major order, that
//!    completes a line for X
//! 2. **Minimax**: the exhaustive search in [`crate::search`]
//!
//! The engine never applies the move it returns.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AiEngine, Board, Pos};
//!
//! let mut engine = AiEngine::new();
//! let board = Board::from_rows(["OO ", "XX ", "   "]).unwrap();
//!
//! let result = engine.get_move_with_stats(&board);
//! assert_eq!(result.best_move, Some(Pos::new(1, 2)));
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos, AI_MARK};
use crate::eval::{DRAW, WIN};
use crate::rules::{empty_cells, has_won};
use crate::search::{SearchResult, Searcher};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Move completes a line for X
    ImmediateWin,
    /// Exhaustive minimax result
    Minimax,
    /// Board was full, nothing searched
    NoMove,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` on a full board
    pub best_move: Option<Pos>,
    /// Value of the move from X's point of view
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    /// Create a result for an immediate win
    #[inline]
    fn immediate_win(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: WIN + WIN,
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 1,
        }
    }

    /// Create a result from the minimax search
    #[inline]
    fn from_minimax(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::Minimax,
            time_ms,
            nodes: result.nodes,
        }
    }

    /// Create a result for a full board
    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: DRAW,
            search_type: SearchType::NoMove,
            time_ms,
            nodes: 0,
        }
    }
}

/// AI engine playing X.
#[derive(Debug, Default)]
pub struct AiEngine {
    searcher: Searcher,
}

impl AiEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the best move for X, or `None` if the board is full.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move for X with search statistics.
    ///
    /// Calling this on a full board is a caller error; it is reported as a
    /// result with no move rather than a panic.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();

        if empty_cells(board).is_empty() {
            debug!("get_move called on a full board");
            return MoveResult::no_move(start.elapsed().as_millis() as u64);
        }

        // 1. Immediate winning move
        if let Some(win_move) = self.find_immediate_win(board) {
            debug!(%win_move, "immediate win");
            return MoveResult::immediate_win(win_move, start.elapsed().as_millis() as u64);
        }

        // 2. Full minimax
        let result = self.searcher.search(board);
        let result = MoveResult::from_minimax(result, start.elapsed().as_millis() as u64);
        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "minimax search finished"
        );
        result
    }

    /// Find the first empty cell that completes a line for X.
    fn find_immediate_win(&self, board: &Board) -> Option<Pos> {
        let mut test_board = *board;
        empty_cells(board).into_iter().find(|&pos| {
            test_board.place(pos, AI_MARK);
            let wins = has_won(&test_board, AI_MARK);
            test_board.remove(pos);
            wins
        })
    }
}

/// X's move on `board`, or `None` if the board is full.
///
/// The board is not modified; the caller applies the move.
pub fn best_move(board: &Board) -> Option<Pos> {
    AiEngine::new().get_move(board)
}
