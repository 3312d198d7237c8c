//! Shapes module - tetromino cell layouts for every rotation state
//!
//! Each shape lives in a 4x4 local grid whose 16 cells are numbered row-major
//! from the top-left corner:
//!
//! ```text
//! 0123  ....
//! 4567  .##.   T, North = [1, 4, 5, 6]
//! 89ab  ###.
//! cdef  ....
//! ```
//!
//! Rotation states are listed clockwise and follow the SRS cell layout.
//! Reference: https://tetris.wiki/SRS

use crate::types::{Rotation, ShapeKind};

/// Index of a cell in the 4x4 local grid (`0..16`).
pub type LocalCell = u8;

/// The four occupied local cells of one rotation state.
pub type ShapeCells = [LocalCell; 4];

/// Side length of the local grid.
pub const GRID_SIZE: u8 = 4;

const I_CELLS: [ShapeCells; 4] = [[4, 5, 6, 7], [2, 6, 10, 14], [11, 10, 9, 8], [13, 9, 5, 1]];
const O_CELLS: [ShapeCells; 4] = [[5, 6, 10, 9], [6, 10, 9, 5], [10, 9, 5, 6], [9, 5, 6, 10]];
const T_CELLS: [ShapeCells; 4] = [[1, 4, 5, 6], [6, 1, 5, 9], [9, 6, 5, 4], [4, 9, 5, 1]];
const S_CELLS: [ShapeCells; 4] = [[1, 2, 5, 4], [10, 6, 5, 1], [8, 9, 5, 6], [0, 4, 5, 9]];
const Z_CELLS: [ShapeCells; 4] = [[0, 1, 5, 6], [2, 6, 5, 9], [10, 9, 5, 4], [8, 4, 5, 1]];
const J_CELLS: [ShapeCells; 4] = [[0, 4, 5, 6], [2, 1, 5, 9], [10, 6, 5, 4], [8, 9, 5, 1]];
const L_CELLS: [ShapeCells; 4] = [[2, 6, 5, 4], [10, 9, 5, 1], [8, 4, 5, 6], [0, 1, 5, 9]];

/// Get the occupied local cells for a shape kind and rotation
pub fn get_shape(kind: ShapeKind, rotation: Rotation) -> ShapeCells {
    let table = match kind {
        ShapeKind::I => &I_CELLS,
        ShapeKind::O => &O_CELLS,
        ShapeKind::T => &T_CELLS,
        ShapeKind::S => &S_CELLS,
        ShapeKind::Z => &Z_CELLS,
        ShapeKind::J => &J_CELLS,
        ShapeKind::L => &L_CELLS,
    };
    table[rotation.index()]
}

/// Split a local cell index into `(row, col)`; row 0 is the top of the grid.
#[inline(always)]
pub fn local_row_col(cell: LocalCell) -> (i32, i32) {
    let row = cell / GRID_SIZE;
    let col = cell % GRID_SIZE;
    (row as i32, col as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn every_state_has_four_distinct_cells_in_grid() {
        for kind in ShapeKind::ALL {
            for rotation in ROTATIONS {
                let cells = get_shape(kind, rotation);
                let unique: HashSet<_> = cells.iter().collect();
                assert_eq!(unique.len(), 4, "{:?} {:?}", kind, rotation);
                assert!(cells.iter().all(|&c| c < GRID_SIZE * GRID_SIZE));
            }
        }
    }

    #[test]
    fn o_piece_occupies_same_cells_in_every_state() {
        let north: HashSet<_> = get_shape(ShapeKind::O, Rotation::North).into_iter().collect();
        for rotation in ROTATIONS {
            let other: HashSet<_> = get_shape(ShapeKind::O, rotation).into_iter().collect();
            assert_eq!(north, other);
        }
    }

    #[test]
    fn row_col_decomposition() {
        assert_eq!(local_row_col(0), (0, 0));
        assert_eq!(local_row_col(6), (1, 2));
        assert_eq!(local_row_col(11), (2, 3));
        assert_eq!(local_row_col(15), (3, 3));
    }
}
