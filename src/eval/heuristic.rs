//! Line-state heuristic used by the minimax search

use crate::board::{Board, Mark};
use crate::rules::has_won;

/// X holds a complete line
pub const WIN: i32 = 1;
/// O holds a complete line
pub const LOSS: i32 = -1;
/// No complete line
pub const DRAW: i32 = 0;

/// Evaluate the board from X's perspective.
///
/// Returns [`WIN`] if X has any complete line, [`LOSS`] if O has one,
/// [`DRAW`] otherwise. X is checked first. This does not check whether the
/// game is over, so it can be called on any position, full or not.
#[must_use]
pub fn score(board: &Board) -> i32 {
    if has_won(board, Mark::X) {
        WIN
    } else if has_won(board, Mark::O) {
        LOSS
    } else {
        DRAW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_empty_board() {
        assert_eq!(score(&Board::new()), DRAW);
    }

    #[test]
    fn test_score_x_line() {
        let board = Board::from_rows(["X  ", "XO ", "XO "]).unwrap();
        assert_eq!(score(&board), WIN);
    }

    #[test]
    fn test_score_o_line() {
        let board = Board::from_rows(["OX ", "XO ", "X O"]).unwrap();
        assert_eq!(score(&board), LOSS);
    }

    #[test]
    fn test_score_ignores_fullness() {
        let x_full = Board::from_rows(["XXX", "OOX", "XOO"]).unwrap();
        assert_eq!(score(&x_full), WIN);

        // Both sides complete a line: X is checked first
        let both = Board::from_rows(["XOX", "XOX", "OOX"]).unwrap();
        assert_eq!(score(&both), WIN);

        let o_full = Board::from_rows(["OXX", "XOX", "OXO"]).unwrap();
        assert_eq!(score(&o_full), LOSS);

        let drawn = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();
        assert_eq!(score(&drawn), DRAW);
    }

    #[test]
    fn test_score_non_terminal_without_line() {
        let board = Board::from_rows(["XX ", "OO ", "   "]).unwrap();
        assert_eq!(score(&board), DRAW);
    }
}
