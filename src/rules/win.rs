//! Win condition checking
//!
//! A mark wins when it fills any of the 8 lines: 3 rows, 3 columns and
//! the 2 diagonals.

use crate::board::{Board, Mark, Pos};

const fn p(row: u8, col: u8) -> Pos {
    Pos { row, col }
}

/// The 8 winning lines, rows first, then columns, then diagonals
pub const LINES: [[Pos; 3]; 8] = [
    // Rows
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    // Columns
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    // Diagonals
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

/// Check if `mark` fills any winning line
#[inline]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

/// Find the first line completed by `mark`
///
/// Returns `None` for `Mark::Empty`: an empty line is not a win.
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Pos; 3]> {
    if mark == Mark::Empty {
        return None;
    }
    LINES
        .iter()
        .find(|line| line.iter().all(|&pos| board.get(pos) == mark))
        .copied()
}

/// Check for a winner
///
/// Returns `Some(Mark)` if either side has a line, `None` otherwise.
/// X is checked first.
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_won(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_no_winner() {
        let board = Board::new();
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
        assert!(!has_won(&board, Mark::Empty));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_its_mark_only() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let mut board = Board::new();
                for pos in line {
                    board.place(pos, mark);
                }
                assert!(has_won(&board, mark), "line {:?} for {:?}", line, mark);
                assert!(!has_won(&board, mark.opponent()));
                assert_eq!(winning_line(&board, mark), Some(line));
                assert_eq!(check_winner(&board), Some(mark));
            }
        }
    }

    #[test]
    fn test_lines_are_distinct() {
        for (i, a) in LINES.iter().enumerate() {
            for b in &LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = Board::from_rows(["XX ", "OO ", "   "]).unwrap();
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_rows(["XOX", "   ", "   "]).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_anti_diagonal() {
        let board = Board::from_rows(["OXX", "OX ", "X O"]).unwrap();
        assert!(has_won(&board, Mark::X));
        assert_eq!(
            winning_line(&board, Mark::X),
            Some([Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)])
        );
    }

    #[test]
    fn test_full_board_without_winner() {
        let board = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_with_winner() {
        let board = Board::from_rows(["XXX", "OOX", "XOO"]).unwrap();
        assert!(has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }
}
