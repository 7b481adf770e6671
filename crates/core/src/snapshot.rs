//! Snapshot module - plain-data copies of the game for presentation
//!
//! A [`GameSnapshot`] holds everything a renderer needs for one frame. It is
//! `Copy`, owns no heap data and is refreshed in place by
//! [`GameState::snapshot_into`](crate::game_state::GameState::snapshot_into).

use crate::board::BoardRows;
use crate::piece::{Piece, Shape};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
    pub color: u8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape,
            x: value.x,
            y: value.y,
            color: value.color,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute board cells of the piece that lie inside the board.
    pub fn visible_cells(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.shape.cells().into_iter().filter_map(move |(dx, dy)| {
            let x = self.x.saturating_add(dx);
            let y = self.y.saturating_add(dy);
            if x >= 0 && x < BOARD_WIDTH as i16 && y >= 0 && y < BOARD_HEIGHT as i16 {
                Some((x as u16, y as u16))
            } else {
                None
            }
        })
    }
}

/// Read-only copy of everything presentation needs to paint a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardRows,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub game_over: bool,
    pub overlay_visible: bool,
}

impl GameSnapshot {
    /// Whether gameplay commands currently act on the piece.
    pub fn playable(&self) -> bool {
        !self.game_over && !self.overlay_visible
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[EMPTY_CELL; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            game_over: false,
            overlay_visible: false,
        }
    }
}
