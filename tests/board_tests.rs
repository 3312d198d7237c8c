//! Board tests - fit testing, locking and row clearing

use blocktris::core::{Board, ConfigError, GameConfig, Piece};
use blocktris::types::{Rotation, ShapeKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

fn standard() -> Board {
    Board::from_config(&GameConfig::default()).unwrap()
}

fn occupied(board: &Board) -> usize {
    board.cells().iter().filter(|c| c.is_some()).count()
}

#[test]
fn test_board_new_empty() {
    let board = standard();
    assert_eq!(board.width(), DEFAULT_BOARD_WIDTH);
    assert_eq!(board.height(), DEFAULT_BOARD_HEIGHT);

    for y in 0..DEFAULT_BOARD_HEIGHT {
        for x in 0..DEFAULT_BOARD_WIDTH {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_rejects_bad_dimensions() {
    assert_eq!(
        Board::new(0, 16).unwrap_err(),
        ConfigError::InvalidDimension {
            name: "width",
            value: 0
        }
    );
    assert!(Board::new(10, -1).is_err());
    assert!(Board::new(257, 10).is_err());
    assert!(Board::new(1, 1).is_ok());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = standard();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(DEFAULT_BOARD_WIDTH, 0), None);
    assert_eq!(board.get(0, DEFAULT_BOARD_HEIGHT), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = standard();

    assert!(board.set(5, 10, Some(ShapeKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(ShapeKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(ShapeKind::T)));
    assert!(!board.set(0, DEFAULT_BOARD_HEIGHT, Some(ShapeKind::T)));
}

#[test]
fn test_from_rows_reads_top_row_first() {
    let board = Board::from_rows(&["I...", "....", "..oZ"]).unwrap();
    assert_eq!((board.width(), board.height()), (4, 3));
    assert_eq!(board.get(0, 2), Some(Some(ShapeKind::I)));
    assert_eq!(board.get(2, 0), Some(Some(ShapeKind::O)));
    assert_eq!(board.get(3, 0), Some(Some(ShapeKind::Z)));
    assert_eq!(occupied(&board), 3);

    assert!(Board::from_rows(&["....", "..."]).is_err());
}

#[test]
fn test_fits_checks_every_bound() {
    let board = standard();
    // I north occupies local row 1: y - 1, x..x+3
    assert!(board.fits(&Piece::new(ShapeKind::I, Rotation::North, 0, 1)));
    assert!(board.fits(&Piece::new(ShapeKind::I, Rotation::North, 6, 15)));

    assert!(!board.fits(&Piece::new(ShapeKind::I, Rotation::North, -1, 5)));
    assert!(!board.fits(&Piece::new(ShapeKind::I, Rotation::North, 7, 5)));
    assert!(!board.fits(&Piece::new(ShapeKind::I, Rotation::North, 3, 0)));
    // I east spans rows y..y-3
    assert!(!board.fits(&Piece::new(ShapeKind::I, Rotation::East, 3, 16)));
    assert!(board.fits(&Piece::new(ShapeKind::I, Rotation::East, 3, 15)));
}

#[test]
fn test_fits_rejects_occupied_cell() {
    let mut board = standard();
    let piece = Piece::new(ShapeKind::T, Rotation::North, 3, 10);
    assert!(board.fits(&piece));

    let (x, y) = piece.cell_array()[3];
    board.set(x, y, Some(ShapeKind::O));
    assert!(!board.fits(&piece));
}

#[test]
fn test_lock_writes_kind_into_cells() {
    let mut board = standard();
    let piece = Piece::new(ShapeKind::L, Rotation::North, 2, 5);
    board.lock(&piece);

    assert_eq!(occupied(&board), 4);
    for (x, y) in piece.cells() {
        assert_eq!(board.get(x, y), Some(Some(ShapeKind::L)));
    }
    assert!(!board.fits(&piece));
}

#[test]
fn test_clear_without_full_rows_is_a_no_op() {
    let mut board = Board::from_rows(&[
        "....",
        "J.J.",
        "SSS.",
    ])
    .unwrap();
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_removes_full_rows_and_keeps_order() {
    let mut board = Board::from_rows(&[
        "....",
        "T...",
        "IIII",
        ".O..",
        "LLLL",
    ])
    .unwrap();

    assert_eq!(board.clear_full_rows(), 2);
    let expected = Board::from_rows(&[
        "....",
        "....",
        "....",
        "T...",
        ".O..",
    ])
    .unwrap();
    assert_eq!(board, expected);
    assert_eq!(board.height(), 5);

    // Nothing new is full, so a second pass changes nothing.
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, expected);
}

#[test]
fn test_lock_filling_the_gap_clears_one_row() {
    let mut board = standard();
    for x in 0..DEFAULT_BOARD_WIDTH {
        if x != 9 {
            board.set(x, 0, Some(ShapeKind::Z));
        }
    }
    board.set(0, 1, Some(ShapeKind::S));
    assert!(!board.is_row_full(0));

    // I east sits in column x + 2, rows y..y-3
    let piece = Piece::new(ShapeKind::I, Rotation::East, 7, 3);
    assert!(board.fits(&piece));
    board.lock(&piece);
    assert!(board.is_row_full(0));

    assert_eq!(board.clear_full_rows(), 1);
    // Old row 1 dropped to the bottom along with the rest of the I.
    assert_eq!(board.get(0, 0), Some(Some(ShapeKind::S)));
    assert_eq!(board.get(9, 0), Some(Some(ShapeKind::I)));
    assert_eq!(board.get(9, 2), Some(Some(ShapeKind::I)));
    assert_eq!(board.get(9, 3), Some(None));
    assert_eq!(occupied(&board), 4);
}

#[test]
fn test_rows_iterate_bottom_up() {
    let board = Board::from_rows(&["I..", "..."]).unwrap();
    let rows: Vec<_> = board.rows().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].iter().all(|c| c.is_none()));
    assert_eq!(rows[1][0], Some(ShapeKind::I));
    assert_eq!(board.row(1), Some(rows[1]));
    assert_eq!(board.row(2), None);
}
