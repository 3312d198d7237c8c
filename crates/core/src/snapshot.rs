//! Read-only views of an engine for renderers.

use crate::piece::Piece;
use crate::types::{Rotation, ShapeKind};

/// What a renderer should draw in one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisibleCell {
    #[default]
    Empty,
    /// Part of the stack of locked pieces
    Locked(ShapeKind),
    /// Part of the active, still falling piece
    Falling(ShapeKind),
}

impl VisibleCell {
    pub fn is_occupied(&self) -> bool {
        !matches!(self, VisibleCell::Empty)
    }

    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            VisibleCell::Empty => None,
            VisibleCell::Locked(kind) | VisibleCell::Falling(kind) => Some(*kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
    /// Absolute board coordinates of the four cells
    pub cells: [(i32, i32); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cell_array(),
        }
    }
}

/// Everything a renderer needs for one frame.
///
/// `cells` is row-major with row 0 at the bottom, matching board coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: i32,
    pub height: i32,
    pub cells: Vec<VisibleCell>,
    pub active: Option<ActiveSnapshot>,
    pub lines_cleared: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn get(&self, x: i32, y: i32) -> Option<VisibleCell> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        self.cells.get((y * self.width + x) as usize).copied()
    }

    /// Rows of the visible field, bottom row first.
    pub fn rows(&self) -> impl Iterator<Item = &[VisibleCell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
