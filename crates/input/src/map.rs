//! Key mapping from terminal events to driver commands.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the driver should do in response to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward a move to the engine
    Move(Direction),
    /// Pause or resume; starts a new game once the current one is over
    TogglePause,
    /// Switch between kind colors and the monochrome falling/locked palette
    ToggleColors,
    Quit,
}

/// Map keyboard input to commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(Command::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(Command::Move(Direction::Right))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(Command::Move(Direction::Down))
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('z')
        | KeyCode::Char('Z') => Some(Command::Move(Direction::RotateLeft)),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Command::Move(Direction::RotateRight)),

        // Driver
        KeyCode::Esc | KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::ToggleColors),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
