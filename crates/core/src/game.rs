//! Game engine module - the move / fall / lock state machine
//!
//! This module ties the board, the falling piece and the bag randomizer
//! together. The driver calls [`GameEngine::try_move`] for gravity ticks and
//! player input; everything runs synchronously to completion.
//!
//! A failed `Down` move is the lock signal: the piece freezes into the board,
//! full rows are cleared and the next piece spawns. Any other failed move is
//! simply rejected. A spawn that does not fit ends the game for good.

use arrayvec::ArrayVec;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::bag::ShapeBag;
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::piece::Piece;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, VisibleCell};
use crate::types::{Direction, Rotation};

/// Lifecycle state of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    /// Terminal; only a new engine leaves it
    GameOver,
}

/// Complete state of one game.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    board: Board,
    /// Falling piece; `None` only once the game is over
    active: Option<Piece>,
    bag: ShapeBag<R>,
    lines_cleared: u32,
    status: GameStatus,
}

impl GameEngine<StdRng> {
    /// Start a game seeded from OS entropy.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Start a reproducible game.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> GameEngine<R> {
    /// Start a game drawing randomness from `rng`.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        let board = Board::from_config(&config)?;
        Ok(Self::with_board(board, rng))
    }

    /// Start a game on a prepared board, e.g. a puzzle or test fixture.
    ///
    /// The first piece spawns immediately; if it does not fit, the game is
    /// already over.
    pub fn with_board(board: Board, rng: R) -> Self {
        let config = GameConfig::new(board.width(), board.height());
        let mut engine = Self {
            config,
            board,
            active: None,
            bag: ShapeBag::new(rng),
            lines_cleared: 0,
            status: GameStatus::Running,
        };
        engine.spawn_next_piece();
        engine
    }

    /// Replace this game with a brand-new one of the same size.
    ///
    /// The random stream carries over, everything else starts fresh: empty
    /// board, fair first bag, zero lines.
    pub fn new_game(self) -> Self {
        let mut board = self.board;
        board.clear();
        info!(
            "new game on {}x{} board (previous: {} lines)",
            board.width(),
            board.height(),
            self.lines_cleared
        );
        Self::with_board(board, self.bag.into_rng())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_piece(&self) -> Option<Piece> {
        self.active
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Where a freshly spawned piece is anchored: horizontally centered, top row.
    pub fn spawn_position(&self) -> (i32, i32) {
        (self.board.width() / 2 - 2, self.board.height() - 1)
    }

    /// Draw the next kind from the bag and place it at the spawn position.
    ///
    /// Returns false, and ends the game, when the new piece does not fit.
    pub fn spawn_next_piece(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        let kind = self.bag.next_kind();
        let (x, y) = self.spawn_position();
        let piece = Piece::new(kind, Rotation::North, x, y);

        if !self.board.fits(&piece) {
            self.active = None;
            self.status = GameStatus::GameOver;
            info!(
                "game over: {:?} blocked at spawn after {} lines",
                kind, self.lines_cleared
            );
            return false;
        }

        trace!("spawned {:?} at ({}, {})", kind, x, y);
        self.active = Some(piece);
        true
    }

    /// Apply one move to the active piece.
    ///
    /// Returns true iff the piece moved or rotated. A `Down` that cannot be
    /// taken locks the piece instead, clears rows and spawns the next piece,
    /// and still returns false. After game over every call is a no-op.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        if self.is_game_over() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let (drot, dx, dy) = direction.delta();
        let candidates: ArrayVec<Piece, 4> = if drot != 0 {
            active.kick_candidates(drot)
        } else {
            let mut single = ArrayVec::new();
            single.push(active.moved(0, dx, dy));
            single
        };

        if let Some(piece) = candidates.into_iter().find(|p| self.board.fits(p)) {
            self.active = Some(piece);
            return true;
        }

        if direction == Direction::Down {
            self.freeze(active);
        }
        false
    }

    /// Lock `piece`, clear full rows and bring in the next piece.
    fn freeze(&mut self, piece: Piece) {
        self.board.lock(&piece);
        let cleared = self.board.clear_full_rows();
        self.lines_cleared += cleared as u32;
        debug!(
            "locked {:?} at ({}, {}) rotation {:?}; cleared {} (total {})",
            piece.kind, piece.x, piece.y, piece.rotation, cleared, self.lines_cleared
        );
        self.spawn_next_piece();
    }

    /// Board cells with the active piece overlaid.
    ///
    /// The piece is left out once the game is over.
    pub fn visible_cell(&self, x: i32, y: i32) -> Option<VisibleCell> {
        let cell = self.board.get(x, y)?;
        if let Some(active) = self.active.filter(|_| !self.is_game_over()) {
            if active.cells().any(|c| c == (x, y)) {
                return Some(VisibleCell::Falling(active.kind));
            }
        }
        Some(match cell {
            Some(kind) => VisibleCell::Locked(kind),
            None => VisibleCell::Empty,
        })
    }

    /// Fill `out` with the current state, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.cells.clear();
        out.cells.extend(self.board.cells().iter().map(|cell| match cell {
            Some(kind) => VisibleCell::Locked(*kind),
            None => VisibleCell::Empty,
        }));

        out.active = None;
        if !self.is_game_over() {
            if let Some(active) = self.active {
                for (x, y) in active.cells() {
                    if let Some(slot) = out.cells.get_mut((y * out.width + x) as usize) {
                        *slot = VisibleCell::Falling(active.kind);
                    }
                }
                out.active = Some(ActiveSnapshot::from(active));
            }
        }

        out.lines_cleared = self.lines_cleared;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn force_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
