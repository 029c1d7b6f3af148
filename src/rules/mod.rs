//! Game rules for tic-tac-toe
//!
//! This module implements the terminal-position checks:
//! - Win conditions (three in a row, column or diagonal)
//! - Full board detection and empty-cell enumeration

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{empty_cells, is_full};
pub use win::{check_winner, has_won, winning_line, LINES};
