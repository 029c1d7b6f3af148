//! Empty-cell enumeration and full-board detection

use crate::board::{Board, Pos};

/// True iff no cell is empty.
#[inline]
pub fn is_full(board: &Board) -> bool {
    Pos::all().all(|pos| !board.is_empty(pos))
}

/// All empty cells in row-major order.
///
/// The order is the search's tie-break order, so it must not change.
pub fn empty_cells(board: &Board) -> Vec<Pos> {
    Pos::all().filter(|&pos| board.is_empty(pos)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Mark, TOTAL_CELLS};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert_eq!(empty_cells(&board).len(), TOTAL_CELLS);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows(["X O", " X ", "O  "]).unwrap();
        assert_eq!(
            empty_cells(&board),
            vec![
                Pos::new(0, 1),
                Pos::new(1, 0),
                Pos::new(1, 2),
                Pos::new(2, 1),
                Pos::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();
        assert!(is_full(&board));
        assert!(empty_cells(&board).is_empty());
    }

    #[test]
    fn test_one_empty_cell() {
        let mut board = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();
        board.remove(Pos::new(2, 2));
        assert!(!is_full(&board));
        assert_eq!(empty_cells(&board), vec![Pos::new(2, 2)]);

        board.place(Pos::new(2, 2), Mark::O);
        assert!(is_full(&board));
    }

    #[test]
    fn test_full_iff_no_empty_cells() {
        // Fill cells one at a time and check the two agree at every step
        let mut board = Board::new();
        for (i, pos) in Pos::all().enumerate() {
            assert_eq!(is_full(&board), empty_cells(&board).is_empty());
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.place(pos, mark);
        }
        assert!(is_full(&board));
        assert!(empty_cells(&board).is_empty());
    }
}
