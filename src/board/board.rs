//! Board structure

use std::fmt;

use super::{Mark, Pos, BOARD_SIZE};

/// 3x3 game board, mutated in place by whichever side holds the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from three rows of `'X'`, `'O'` and `' '`/`'.'`.
    ///
    /// Returns `None` if a row is not exactly three cells long or holds an
    /// unknown character.
    ///
    /// ```
    /// use tictactoe::{Board, Mark, Pos};
    ///
    /// let board = Board::from_rows(["XX ", "OO ", "   "]).unwrap();
    /// assert_eq!(board.get(Pos::new(0, 1)), Mark::X);
    /// assert_eq!(board.get(Pos::new(1, 2)), Mark::Empty);
    /// ```
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Option<Self> {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let marks: Vec<Mark> = line.chars().map(Mark::from_symbol).collect::<Option<_>>()?;
            if marks.len() != BOARD_SIZE {
                return None;
            }
            for (col, mark) in marks.into_iter().enumerate() {
                board.cells[row][col] = mark;
            }
        }
        Some(board)
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Place a mark (no legality checks, search uses this for make/unmake)
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        self.cells[pos.row as usize][pos.col as usize] = mark;
    }

    /// Clear a cell
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.place(pos, Mark::Empty);
    }

    /// Clear every cell for a new game
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|&&m| m == mark).count()
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.count(Mark::X) + self.count(Mark::O)
    }

    /// Check if board has no marks
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.mark_count() == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let line: Vec<String> = row.iter().map(|m| m.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
