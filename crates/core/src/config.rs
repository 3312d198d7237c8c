//! Game configuration.

use crate::error::ConfigError;
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIM};

/// Board dimensions for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
}

impl GameConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions lie in `1..=MAX_BOARD_DIM`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

fn check_dimension(name: &'static str, value: i32) -> Result<(), ConfigError> {
    if value < 1 || value > MAX_BOARD_DIM {
        return Err(ConfigError::InvalidDimension { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_board() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (10, 16));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_and_oversized_dimensions() {
        assert_eq!(
            GameConfig::new(0, 16).validate(),
            Err(ConfigError::InvalidDimension {
                name: "width",
                value: 0
            })
        );
        assert_eq!(
            GameConfig::new(10, -3).validate(),
            Err(ConfigError::InvalidDimension {
                name: "height",
                value: -3
            })
        );
        assert!(GameConfig::new(MAX_BOARD_DIM + 1, 16).validate().is_err());
        assert!(GameConfig::new(1, 1).validate().is_ok());
    }
}
