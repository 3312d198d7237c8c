//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! kind of the locked piece that filled it. Storage is a flat vector in
//! row-major order for cache locality.
//! Coordinates: `(x, y)` with `x` growing to the right and `y` growing upward;
//! `(0, 0)` is the bottom-left cell and row 0 is the bottom row.

use std::fmt;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::piece::Piece;
use crate::types::{Cell, ShapeKind};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    /// Flat array of cells, row-major order (y * width + x), row 0 at the bottom
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        GameConfig::new(width, height).validate()?;
        Ok(Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::new(config.width, config.height)
    }

    /// Build a board from text rows listed top row first.
    ///
    /// A shape letter (`I`, `O`, `T`, `S`, `Z`, `J`, `L`, any case) marks a cell
    /// locked by that kind; any other character is empty.
    ///
    /// ```
    /// use blocktris_core::Board;
    ///
    /// let board = Board::from_rows(&["..", "IO"]).unwrap();
    /// assert_eq!(board.height(), 2);
    /// assert!(board.is_row_full(0));
    /// assert!(!board.is_row_full(1));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, ConfigError> {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as i32;
        let mut board = Self::new(width, rows.len() as i32)?;
        for (i, row) in rows.iter().enumerate() {
            let len = row.chars().count() as i32;
            if len != width {
                return Err(ConfigError::InvalidDimension {
                    name: "row width",
                    value: len,
                });
            }
            let y = board.height - 1 - i as i32;
            for (x, ch) in row.chars().enumerate() {
                let cell = ShapeKind::from_str(ch.encode_utf8(&mut [0u8; 4]));
                board.set(x as i32, y, cell);
            }
        }
        Ok(board)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True iff every cell of `piece` is inside the board and empty.
    ///
    /// Stops at the first offending cell.
    pub fn fits(&self, piece: &Piece) -> bool {
        piece.cells().all(|(x, y)| self.is_valid(x, y))
    }

    /// Freeze `piece` into the grid, marking its cells with its kind.
    ///
    /// Cells outside the board are skipped; the engine only locks pieces that fit.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i32) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: i32) -> Option<&[Cell]> {
        if y < 0 || y >= self.height {
            return None;
        }
        let width = self.width as usize;
        let start = y as usize * width;
        Some(&self.cells[start..start + width])
    }

    /// All rows, bottom row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Remaining rows keep their order and slide down; the same number of empty
    /// rows is added at the top, so the height never changes. Two-pointer
    /// compaction, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_y = 0usize;

        // Scan from bottom to top
        for read_y in 0..self.height as usize {
            if self.is_row_full(read_y as i32) {
                cleared += 1;
                continue;
            }
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
            write_y += 1;
        }

        // Empty the rows vacated at the top
        for cell in &mut self.cells[write_y * width..] {
            *cell = None;
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

/// Renders rows top first, `.` for empty cells and the kind letter otherwise.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let ch = match self.get(x, y).flatten() {
                    Some(kind) => kind.letter(),
                    None => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
