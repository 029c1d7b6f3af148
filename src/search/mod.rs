//! Search module for the tic-tac-toe AI
//!
//! Contains the exhaustive minimax search used to pick X's move.

pub mod minimax;

pub use minimax::{minimax, SearchResult, Searcher};
