//! Position evaluation
//!
//! Scores are from X's (the automated opponent's) point of view.

pub mod heuristic;

pub use heuristic::{score, DRAW, LOSS, WIN};
