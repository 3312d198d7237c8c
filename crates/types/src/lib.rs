//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, making them usable
//! from the engine, the terminal renderer and the input layer alike.
//!
//! # Coordinates
//!
//! Board origin `(0, 0)` is the **bottom-left** cell and `y` grows upward.
//! Renderers with a top-down native coordinate system flip the y axis themselves.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 10 | Columns of a standard board |
//! | `DEFAULT_BOARD_HEIGHT` | 16 | Rows of a standard board |
//! | `GRAVITY_MS` | 500 | Interval between driver gravity ticks |
//! | `TICK_MS` | 16 | Driver frame interval (~60 FPS) |
//! | `MAX_BOARD_DIM` | 256 | Largest accepted width or height |
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{Direction, Rotation, ShapeKind, DEFAULT_BOARD_HEIGHT};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! assert_eq!(Rotation::North.rotated(-1), Rotation::West);
//! assert_eq!(Direction::RotateRight.delta(), (1, 0, 0));
//! assert_eq!(DEFAULT_BOARD_HEIGHT, 16);
//! ```

/// Board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: i32 = 10;

/// Board height in cells (16 rows)
pub const DEFAULT_BOARD_HEIGHT: i32 = 16;

/// Largest accepted board width or height.
pub const MAX_BOARD_DIM: i32 = 256;

/// Interval between gravity ticks issued by the driver (milliseconds).
pub const GRAVITY_MS: u32 = 500;

/// Driver frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Kinds allowed at the head of the very first bag of a game.
pub const FAIR_START_KINDS: [ShapeKind; 4] =
    [ShapeKind::I, ShapeKind::J, ShapeKind::L, ShapeKind::T];

/// The seven tetromino shape kinds
///
/// A kind identifies both the geometry of a piece and its render color:
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All seven kinds in table order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Single uppercase letter used by text renderers.
    pub fn letter(&self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::O => 'O',
            ShapeKind::T => 'T',
            ShapeKind::S => 'S',
            ShapeKind::Z => 'Z',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
        }
    }

    /// Position of this kind in [`ShapeKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// True for the kinds a game may open with.
    pub fn is_fair_start(&self) -> bool {
        FAIR_START_KINDS.contains(self)
    }
}

/// Rotation states, listed clockwise
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: Rotated 90° clockwise (index 1)
/// - **South**: Rotated 180° (index 2)
/// - **West**: Rotated 270° clockwise (index 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Build a rotation from any integer, wrapping modulo 4.
    ///
    /// ```
    /// use blocktris_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(5), Rotation::East);
    /// assert_eq!(Rotation::from_index(-1), Rotation::West);
    /// ```
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Index in `0..4`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Rotate by `delta` quarter turns (positive is clockwise).
    pub fn rotated(&self, delta: i8) -> Self {
        Self::from_index(self.index() as i32 + delta as i32)
    }

    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        self.rotated(1)
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        self.rotated(-1)
    }
}

/// Player / timer stimuli accepted by the engine.
///
/// Each direction maps to a fixed `(Δrotation, Δx, Δy)` bundle; see
/// [`Direction::delta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move one cell left
    Left,
    /// Move one cell right
    Right,
    /// Move one cell down (gravity or soft drop); failure locks the piece
    Down,
    /// Rotate a quarter turn counter-clockwise
    RotateLeft,
    /// Rotate a quarter turn clockwise
    RotateRight,
}

impl Direction {
    /// `(Δrotation, Δx, Δy)` for this direction.
    pub fn delta(&self) -> (i8, i32, i32) {
        match self {
            Direction::Left => (0, -1, 0),
            Direction::Right => (0, 1, 0),
            Direction::Down => (0, 0, -1),
            Direction::RotateLeft => (-1, 0, 0),
            Direction::RotateRight => (1, 0, 0),
        }
    }

    pub fn is_rotation(&self) -> bool {
        matches!(self, Direction::RotateLeft | Direction::RotateRight)
    }

    /// Parse direction from string (case-insensitive).
    ///
    /// ```
    /// use blocktris_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("rotleft"), Some(Direction::RotateLeft));
    /// assert_eq!(Direction::from_str("Down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("up"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            "rotleft" | "rotate_left" | "rotateleft" => Some(Direction::RotateLeft),
            "rotright" | "rotate_right" | "rotateright" => Some(Direction::RotateRight),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::RotateLeft => "rotate_left",
            Direction::RotateRight => "rotate_right",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ShapeKind)`: Occupied by a locked piece of that kind
pub type Cell = Option<ShapeKind>;
