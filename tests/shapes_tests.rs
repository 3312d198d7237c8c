//! Shape table and piece geometry tests

use std::collections::HashSet;

use blocktris::core::shapes::local_row_col;
use blocktris::core::{get_shape, Piece, WALL_KICKS};
use blocktris::types::{Direction, Rotation, ShapeKind};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

fn cell_set(piece: &Piece) -> HashSet<(i32, i32)> {
    piece.cells().collect()
}

#[test]
fn test_every_state_has_four_distinct_cells_in_grid() {
    for kind in ShapeKind::ALL {
        for rotation in ROTATIONS {
            let cells = get_shape(kind, rotation);
            let distinct: HashSet<_> = cells.iter().collect();
            assert_eq!(distinct.len(), 4, "{:?} {:?}", kind, rotation);
            assert!(cells.iter().all(|&c| c < 16));
        }
    }
}

#[test]
fn test_local_cell_decomposition() {
    assert_eq!(local_row_col(0), (0, 0));
    assert_eq!(local_row_col(6), (1, 2));
    assert_eq!(local_row_col(15), (3, 3));
}

#[test]
fn test_cells_map_rows_downward() {
    // Local row r lands on board row y - r.
    let piece = Piece::new(ShapeKind::I, Rotation::North, 3, 15);
    assert_eq!(piece.cell_array(), [(3, 14), (4, 14), (5, 14), (6, 14)]);

    let piece = Piece::new(ShapeKind::I, Rotation::East, 3, 15);
    assert_eq!(piece.cell_array(), [(5, 15), (5, 14), (5, 13), (5, 12)]);
}

#[test]
fn test_o_piece_does_not_move_when_rotated() {
    let piece = Piece::new(ShapeKind::O, Rotation::North, 3, 10);
    let base = cell_set(&piece);
    for drot in [-1i8, 1, 2] {
        assert_eq!(cell_set(&piece.moved(drot, 0, 0)), base);
    }
}

#[test]
fn test_other_kinds_change_shape_on_quarter_turn() {
    for kind in ShapeKind::ALL.into_iter().filter(|k| *k != ShapeKind::O) {
        let piece = Piece::new(kind, Rotation::North, 3, 10);
        assert_ne!(cell_set(&piece), cell_set(&piece.moved(1, 0, 0)), "{:?}", kind);
    }
}

#[test]
fn test_moved_returns_new_value() {
    let piece = Piece::new(ShapeKind::T, Rotation::North, 3, 10);
    let (drot, dx, dy) = Direction::Left.delta();
    let left = piece.moved(drot, dx, dy);

    assert_eq!(piece, Piece::new(ShapeKind::T, Rotation::North, 3, 10));
    assert_eq!(left, Piece::new(ShapeKind::T, Rotation::North, 2, 10));

    let turned = piece.moved(-1, 0, 0);
    assert_eq!(turned.rotation, Rotation::West);
    assert_eq!((turned.x, turned.y), (3, 10));
}

#[test]
fn test_four_turns_restore_the_piece() {
    for kind in ShapeKind::ALL {
        let piece = Piece::new(kind, Rotation::East, 4, 8);
        let mut cur = piece;
        for _ in 0..4 {
            cur = cur.moved(1, 0, 0);
        }
        assert_eq!(cur, piece);
    }
}

#[test]
fn test_kick_candidates_follow_fixed_order() {
    let piece = Piece::new(ShapeKind::L, Rotation::South, 5, 9);
    let candidates = piece.kick_candidates(1);
    assert_eq!(candidates.len(), WALL_KICKS.len());

    let offsets: Vec<_> = candidates.iter().map(|c| (c.x - 5, c.y - 9)).collect();
    assert_eq!(offsets, vec![(0, 0), (-1, 0), (1, 0), (0, -1)]);
    assert!(candidates.iter().all(|c| c.rotation == Rotation::West));
}
