//! Piece module - the falling piece as an immutable value
//!
//! A [`Piece`] is a shape kind, a rotation state and an anchor position on the
//! board. Movement never mutates a piece: every transform returns a new value and
//! the engine decides whether to keep it.

use arrayvec::ArrayVec;

use crate::shapes::{get_shape, local_row_col};
use crate::types::{Rotation, ShapeKind};

/// Offsets tried, in order, after a rotation: in place, one left, one right, one down.
///
/// The same list is used for every rotation direction and every target state.
pub const WALL_KICKS: [(i32, i32); 4] = [(0, 0), (-1, 0), (1, 0), (0, -1)];

/// A tetromino placed on the board.
///
/// The anchor `(x, y)` is the board position of the top-left corner of the
/// piece's 4x4 local grid. Local rows run downward while board `y` runs upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn new(kind: ShapeKind, rotation: Rotation, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Absolute board coordinates of the four occupied cells.
    ///
    /// The iterator is lazy and cheap to clone, so callers can walk it as often
    /// as they like.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + Clone {
        let (x, y) = (self.x, self.y);
        get_shape(self.kind, self.rotation)
            .into_iter()
            .map(move |cell| {
                let (row, col) = local_row_col(cell);
                (x + col, y - row)
            })
    }

    /// Collect the occupied cells into a fixed-size array.
    pub fn cell_array(&self) -> [(i32, i32); 4] {
        let mut out = [(0, 0); 4];
        for (slot, cell) in out.iter_mut().zip(self.cells()) {
            *slot = cell;
        }
        out
    }

    /// Return a copy rotated by `drot` quarter turns and shifted by `(dx, dy)`.
    pub fn moved(&self, drot: i8, dx: i32, dy: i32) -> Self {
        Self {
            rotation: self.rotation.rotated(drot),
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Rotation candidates in [`WALL_KICKS`] order.
    pub fn kick_candidates(&self, drot: i8) -> ArrayVec<Piece, 4> {
        WALL_KICKS
            .iter()
            .map(|&(dx, dy)| self.moved(drot, dx, dy))
            .collect()
    }
}
