//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the game: shape geometry, collision,
//! gravity, locking, line clearing and piece sequencing. It has **no**
//! dependencies on terminals, input handling or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same game
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: any driver (terminal, GUI, headless) can consume it
//!
//! # Module Structure
//!
//! - [`shapes`]: 4x4 cell layouts of the seven kinds in four rotation states
//! - [`piece`]: the immutable falling-piece value and its wall-kick candidates
//! - [`board`]: configurable grid with fit testing and line clearing
//! - [`bag`]: 7-bag randomizer with a fair first piece
//! - [`game`]: the move / fall / lock / spawn / game-over state machine
//! - [`snapshot`]: read-only views for renderers
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every run of seven pieces from a bag boundary holds each kind once;
//!   the first piece of a game is always I, J, L or T
//! - **Rotation**: SRS cell layouts with a fixed kick list: in place, left, right, down
//! - **Gravity**: a `Down` move that cannot be taken locks the piece
//! - **Scoring**: the only score is the number of cleared lines
//!
//! # Example
//!
//! ```
//! use blocktris_core::{GameConfig, GameEngine};
//! use blocktris_core::types::Direction;
//!
//! let mut game = GameEngine::with_seed(GameConfig::default(), 12345).unwrap();
//!
//! game.try_move(Direction::Left);
//! game.try_move(Direction::RotateRight);
//! while game.try_move(Direction::Down) {}
//!
//! assert_eq!(game.lines_cleared(), 0);
//! assert!(!game.is_game_over());
//! ```
//!
//! # Timing
//!
//! The engine has no clock. The driver schedules a `Down` move every
//! [`types::GRAVITY_MS`] and serializes those ticks with player input.

pub mod bag;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod piece;
pub mod shapes;
pub mod snapshot;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use bag::ShapeBag;
pub use board::Board;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game::{GameEngine, GameStatus};
pub use piece::{Piece, WALL_KICKS};
pub use shapes::get_shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot, VisibleCell};
