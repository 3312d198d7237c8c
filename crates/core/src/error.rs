//! Error types for engine construction.

use std::fmt;

use crate::types::MAX_BOARD_DIM;

/// Rejected construction parameters.
///
/// Gameplay itself has no error paths: rejected moves, locks and game over are
/// ordinary state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A board dimension outside `1..=MAX_BOARD_DIM`.
    InvalidDimension { name: &'static str, value: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimension { name, value } => write!(
                f,
                "invalid board {}: {} (expected 1..={})",
                name, value, MAX_BOARD_DIM
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
