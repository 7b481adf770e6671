//! Game state module - manages the complete game state
//!
//! This module ties together the board, the falling piece, the random source
//! and the score. It handles gravity timing, piece movement and rotation,
//! line clears, the instructions overlay and the game lifecycle.

use log::{debug, info};

use crate::collision::is_colliding;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::{Board, Piece, SimpleRng};

/// Which commands the game currently accepts.
///
/// Derived from the game-over and overlay flags; game over wins when both
/// are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Gravity runs and gameplay commands move the piece
    Playing,
    /// Instructions are shown; gravity stops and any command dismisses them
    Overlay,
    /// Terminal until a reset
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    rng: SimpleRng,
    score: u32,
    /// Milliseconds accumulated toward the next gravity step.
    drop_timer_ms: u32,
    game_over: bool,
    overlay_visible: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed and spawn the first piece
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    fn with_rng(rng: SimpleRng) -> Self {
        let mut state = Self {
            board: Board::new(),
            active: None,
            rng,
            score: 0,
            drop_timer_ms: 0,
            game_over: false,
            overlay_visible: false,
        };
        state.spawn_piece();
        state
    }

    /// Start from a prepared position instead of an empty board.
    ///
    /// Later spawns draw from `seed`. If `active` already collides the game
    /// starts over.
    pub fn from_position(board: Board, active: Piece, seed: u32) -> Self {
        let game_over = is_colliding(Some(&active), &board);
        Self {
            board,
            active: Some(active),
            rng: SimpleRng::new(seed),
            score: 0,
            drop_timer_ms: 0,
            game_over,
            overlay_visible: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn mode(&self) -> Mode {
        if self.game_over {
            Mode::GameOver
        } else if self.overlay_visible {
            Mode::Overlay
        } else {
            Mode::Playing
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.game_over = self.game_over;
        out.overlay_visible = self.overlay_visible;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a random piece; flags game over if it collides immediately.
    ///
    /// The colliding piece stays active so the final position can be drawn.
    fn spawn_piece(&mut self) -> bool {
        let piece = Piece::spawn(&mut self.rng);
        self.active = Some(piece);

        if is_colliding(Some(&piece), &self.board) {
            self.game_over = true;
            info!("game over: spawn blocked, final score {}", self.score);
            return false;
        }

        debug!("spawned template {}", piece.color);
        true
    }

    /// Try to move the active piece; a colliding move is discarded.
    pub fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.moved(dx, dy);
        if is_colliding(Some(&moved), &self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Try to rotate the active piece clockwise; a colliding rotation is discarded.
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated();
        if is_colliding(Some(&rotated), &self.board) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// One gravity step: move down, or lock the piece where it rests.
    fn step_down(&mut self) {
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
    }

    /// Lock the active piece onto the board, clear rows and spawn the next piece
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(Some(&active));

        let cleared = self.board.clear_full_rows() as u32;
        if cleared > 0 {
            self.score = self
                .score
                .saturating_add(cleared.saturating_mul(LINE_CLEAR_BONUS));
            info!("cleared {} rows, score {}", cleared, self.score);
        }

        self.spawn_piece();
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// Once the accumulated time reaches [`DROP_INTERVAL_MS`] the timer resets
    /// to zero and the piece steps down one row (or locks). Returns true when
    /// a step happened. Does nothing outside [`Mode::Playing`].
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.mode() != Mode::Playing {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < DROP_INTERVAL_MS {
            return false;
        }

        self.drop_timer_ms = 0;
        self.step_down();
        true
    }

    /// Apply a command. Returns true if the state changed.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match self.mode() {
            Mode::GameOver => match command {
                Command::Reset => {
                    self.reset();
                    true
                }
                _ => false,
            },
            // Any interaction while the overlay is up only dismisses it.
            Mode::Overlay => {
                self.overlay_visible = false;
                true
            }
            Mode::Playing => match command {
                Command::MoveLeft => self.try_move(-1, 0),
                Command::MoveRight => self.try_move(1, 0),
                Command::SoftDrop => self.try_move(0, 1),
                Command::Rotate => self.try_rotate(),
                Command::ToggleOverlay => {
                    self.overlay_visible = true;
                    true
                }
                Command::DismissOverlay | Command::Reset => false,
            },
        }
    }

    /// By-value form of [`apply_command`](Self::apply_command).
    pub fn with_command(mut self, command: Command) -> Self {
        self.apply_command(command);
        self
    }

    /// By-value form of [`tick`](Self::tick).
    pub fn with_tick(mut self, elapsed_ms: u32) -> Self {
        self.tick(elapsed_ms);
        self
    }

    /// Fresh board, zero score, new piece. The random sequence continues.
    fn reset(&mut self) {
        let rng = self.rng.clone();
        *self = Self::with_rng(rng);
        info!("game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
