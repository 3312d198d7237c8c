//! Driver-side game session.
//!
//! The engine has no clock and no notion of pausing. A [`Session`] owns one
//! engine plus the presentation state around it and serializes the two
//! sources of stimuli: key commands and elapsed time. Gravity fires every
//! `gravity_ms` of unpaused time; pausing cancels the pending step.

use log::info;
use rand::rngs::StdRng;
use rand::RngCore;

use crate::core::{GameEngine, GameSnapshot};
use crate::input::Command;
use crate::term::ViewOptions;
use crate::types::Direction;

/// Outcome of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    engine: GameEngine<R>,
    paused: bool,
    colors: bool,
    gravity_ms: u32,
    /// Unpaused time since the last gravity step
    fall_timer_ms: u32,
}

impl<R: RngCore + Clone> Session<R> {
    pub fn new(engine: GameEngine<R>, gravity_ms: u32) -> Self {
        let paused = engine.is_game_over();
        Self {
            engine,
            paused,
            colors: true,
            gravity_ms: gravity_ms.max(1),
            fall_timer_ms: 0,
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            paused: self.paused,
            colors: self.colors,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.snapshot_into(out);
    }

    /// Apply one key command.
    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => return Flow::Quit,
            Command::ToggleColors => self.colors = !self.colors,
            Command::TogglePause => {
                if self.engine.is_game_over() {
                    self.start_new_game();
                } else if self.paused {
                    self.resume();
                } else {
                    self.pause();
                }
            }
            Command::Move(direction) => {
                if !self.paused {
                    self.step(direction);
                }
            }
        }
        Flow::Continue
    }

    /// Advance the gravity clock by `elapsed_ms`.
    ///
    /// Returns true when a gravity step was taken. At most one step is taken
    /// per call; a long stall does not drop the piece several rows at once.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.engine.is_game_over() {
            return false;
        }
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.gravity_ms {
            return false;
        }
        self.fall_timer_ms = 0;
        self.step(Direction::Down);
        true
    }

    fn step(&mut self, direction: Direction) {
        self.engine.try_move(direction);
        if self.engine.is_game_over() {
            info!("game over after {} lines", self.engine.lines_cleared());
            self.pause();
        }
    }

    fn pause(&mut self) {
        self.paused = true;
        self.fall_timer_ms = 0;
    }

    fn resume(&mut self) {
        self.paused = false;
        self.fall_timer_ms = 0;
    }

    fn start_new_game(&mut self) {
        self.engine = self.engine.clone().new_game();
        self.resume();
    }
}
