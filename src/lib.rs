//! Blocktris (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces
//! of the terminal front end that are not rendering: argument parsing,
//! log setup and the [`session::Session`] that turns key commands and
//! gravity ticks into engine moves.

pub mod cli;
pub mod logging;
pub mod session;

pub use blocktris_core as core;
pub use blocktris_input as input;
pub use blocktris_term as term;
pub use blocktris_types as types;
