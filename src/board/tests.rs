use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_player_roles() {
    assert_eq!(AI_MARK, Mark::X);
    assert_eq!(HUMAN_MARK, Mark::O);
    assert_eq!(AI_MARK.opponent(), HUMAN_MARK);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(1, 2);
    assert_eq!(pos.row, 1);
    assert_eq!(pos.col, 2);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(4);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(3, 0));
    assert!(!Pos::is_valid(0, 3));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 2);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_all_row_major() {
    let all: Vec<Pos> = Pos::all().collect();
    assert_eq!(all.len(), TOTAL_CELLS);
    assert_eq!(all[0], Pos::new(0, 0));
    assert_eq!(all[3], Pos::new(1, 0));
    assert_eq!(all[8], Pos::new(2, 2));
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_board_place_and_remove() {
    let mut board = Board::new();
    assert!(board.is_board_empty());

    board.place(Pos::new(1, 1), Mark::X);
    assert_eq!(board.get(Pos::new(1, 1)), Mark::X);
    assert!(!board.is_empty(Pos::new(1, 1)));
    assert_eq!(board.mark_count(), 1);

    board.remove(Pos::new(1, 1));
    assert_eq!(board, Board::new());
}

#[test]
fn test_board_from_rows() {
    let board = Board::from_rows(["X.O", " X ", "O.X"]).unwrap();
    assert_eq!(board.count(Mark::X), 3);
    assert_eq!(board.count(Mark::O), 2);
    assert_eq!(board.get(Pos::new(0, 2)), Mark::O);
    assert_eq!(board.get(Pos::new(2, 1)), Mark::Empty);
}

#[test]
fn test_board_from_rows_rejects_bad_input() {
    assert!(Board::from_rows(["XX", "   ", "   "]).is_none());
    assert!(Board::from_rows(["XXXX", "   ", "   "]).is_none());
    assert!(Board::from_rows(["X?O", "   ", "   "]).is_none());
}

#[test]
fn test_board_reset() {
    let mut board = Board::from_rows(["XOX", "OXO", "OXO"]).unwrap();
    board.reset();
    assert!(board.is_board_empty());
}

#[test]
fn test_board_display() {
    let board = Board::from_rows(["X O", " X ", "  O"]).unwrap();
    assert_eq!(board.to_string(), "X| |O\n-+-+-\n |X| \n-+-+-\n | |O");
}
