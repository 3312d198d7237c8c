//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto driver [`Command`]s. Gameplay keys become
//! [`Command::Move`] with an engine [`Direction`](crate::types::Direction); the
//! rest (pause, colors, quit) are handled by the driver itself.

pub mod map;

pub use blocktris_types as types;

pub use map::{handle_key_event, should_quit, Command};
