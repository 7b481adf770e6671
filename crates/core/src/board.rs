//! Board module - the occupancy grid of settled blocks
//!
//! The board is a 10x20 grid where each cell is either empty (`0`) or holds the
//! 1-based palette index of the piece that settled there.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! Cell values only change through [`Board::merge`] and [`Board::clear_full_rows`].

use log::debug;

use crate::piece::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row-major matrix form of the board, as handed to presentation.
pub type BoardRows = [[Cell; WIDTH]; HEIGHT];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY_CELL; BOARD_SIZE],
        }
    }

    /// Build a board from a prepared row matrix.
    ///
    /// Used to set up positions for puzzles, tests and benchmarks.
    pub fn from_rows(rows: &BoardRows) -> Self {
        let mut cells = [EMPTY_CELL; BOARD_SIZE];
        for (y, row) in rows.iter().enumerate() {
            cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= WIDTH as i16 || y < 0 || y >= HEIGHT as i16 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(cell) if cell != EMPTY_CELL)
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        Self::index(x, y).is_none()
    }

    /// Borrow row `y`. Returns None past the bottom.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        Some(&self.cells[y * WIDTH..(y + 1) * WIDTH])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|&cell| cell != EMPTY_CELL))
            .unwrap_or(false)
    }

    /// Check if every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY_CELL)
    }

    /// Remove row `y`, shift all rows above down and insert an empty row on top.
    fn clear_row(&mut self, y: usize) {
        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * WIDTH;
            self.cells
                .copy_within(src_start..src_start + WIDTH, row * WIDTH);
        }
        self.cells[..WIDTH].fill(EMPTY_CELL);
    }

    /// Clear all full rows and return how many were removed.
    ///
    /// Rows are scanned bottom to top. After a row is removed the rows above
    /// shift into its index, so the same index is tested again before moving
    /// up. Stacked full rows are therefore all counted.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = HEIGHT;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Commit a piece's occupied cells into the grid.
    ///
    /// Each occupied cell inside the board is written with the piece's
    /// `color + 1`; cells outside the board are skipped. An absent piece or a
    /// piece with an empty shape leaves the board untouched.
    pub fn merge(&mut self, piece: Option<&Piece>) {
        let Some(piece) = piece else {
            return;
        };
        if piece.shape.is_empty() {
            return;
        }

        let value = piece.color.saturating_add(1);
        let mut written = 0usize;
        for (x, y) in piece.cells() {
            if self.set(x, y, value) {
                written += 1;
            }
        }
        debug!(
            "merged piece color={} at ({}, {}), {} cells",
            piece.color, piece.x, piece.y, written
        );
    }

    /// Copy the board into a row matrix (snapshot export).
    pub fn write_u8_grid(&self, out: &mut BoardRows) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * WIDTH..(y + 1) * WIDTH]);
        }
    }

    /// Convert to a row matrix
    pub fn to_rows(&self) -> BoardRows {
        let mut rows = [[EMPTY_CELL; WIDTH]; HEIGHT];
        self.write_u8_grid(&mut rows);
        rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
