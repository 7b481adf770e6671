//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: the grid, the falling piece, the
//! collision rule and the state machine driven by ticks and commands.
//! It has no dependencies on UI or I/O (it only logs through the `log`
//! facade), making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised without a terminal or a timer
//! - **Total**: No operation fails; bad input falls back to safe defaults
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 occupancy grid with merge and line clearing
//! - [`collision`]: the predicate gating every move, rotation, merge and spawn
//! - [`piece`]: shape matrices, spawning, moving and corner-pivot rotation
//! - [`game_state`]: active piece, score, gravity timer, overlay and game over
//! - [`rng`]: seeded random source for spawns
//! - [`snapshot`]: plain-data copy of the state for presentation
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{Command, DROP_INTERVAL_MS};
//!
//! let mut game = GameState::new(12345);
//! let start_y = game.active().unwrap().y;
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::Rotate);
//!
//! // One drop interval moves the piece down one row.
//! game.tick(DROP_INTERVAL_MS);
//! assert_eq!(game.active().unwrap().y, start_y + 1);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardRows};
pub use collision::is_colliding;
pub use game_state::{GameState, Mode};
pub use piece::{Piece, Shape, SPAWN_X, SPAWN_Y};
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
