//! Tic-tac-toe against an exhaustive minimax opponent
//!
//! The human plays O and moves first; the engine plays X.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: 3x3 board, marks and positions
//! - [`rules`]: Win detection, full board, empty cells
//! - [`eval`]: Line-state heuristic
//! - [`search`]: Exhaustive minimax
//! - [`engine`]: AI engine the presentation layer calls
//! - [`game`]: Headless game session behind the [`game::GameView`] trait
//! - [`ui`]: egui/eframe front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{best_move, has_won, is_full, Board, Mark, Pos};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(1, 1), Mark::O);
//!
//! if !has_won(&board, Mark::O) && !is_full(&board) {
//!     if let Some(pos) = best_move(&board) {
//!         board.place(pos, Mark::X);
//!         println!("AI plays at {}", pos);
//!     }
//! }
//! assert_eq!(board.mark_count(), 2);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, AI_MARK, BOARD_SIZE, HUMAN_MARK};
pub use engine::{best_move, AiEngine, MoveResult, SearchType};
pub use eval::score;
pub use game::{Game, GameView, MoveError, Outcome};
pub use rules::{empty_cells, has_won, is_full};
