//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! [`core::GameSnapshot`] into a simple framebuffer that is then flushed to the
//! terminal with `crossterm`.
//!
//! The engine knows nothing about this crate; it only reads snapshots.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blocktris_core as core;
pub use blocktris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{kind_color, GameView, ViewOptions, Viewport, BACKGROUND};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
