//! Collision rule - the single predicate gating every piece update
//!
//! Moves, rotations, merges and spawns are all accepted or rejected by
//! [`is_colliding`]. It fails closed: anything it cannot judge collides.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether `piece` overlaps the walls, the floor or settled cells.
///
/// For every occupied cell at absolute (x, y):
/// - x outside `0..BOARD_WIDTH` collides,
/// - y at or below `BOARD_HEIGHT` collides,
/// - y inside the board collides when that board cell is occupied.
///
/// Cells above the top edge (y < 0) only get the horizontal check, so pieces
/// may sit partially above the visible board. An absent piece or one with an
/// empty shape always collides.
///
/// ```
/// use blockfall_core::{is_colliding, Board, Piece};
///
/// let board = Board::new();
/// let piece = Piece::from_template(0).unwrap();
/// assert!(!is_colliding(Some(&piece), &board));
/// assert!(is_colliding(Some(&piece.moved(-5, 0)), &board));
/// assert!(is_colliding(None, &board));
/// ```
pub fn is_colliding(piece: Option<&Piece>, board: &Board) -> bool {
    let Some(piece) = piece else {
        return true;
    };
    if piece.shape.is_empty() {
        return true;
    }

    piece.cells().any(|(x, y)| {
        x < 0
            || x >= BOARD_WIDTH as i16
            || y >= BOARD_HEIGHT as i16
            || (y >= 0 && board.is_occupied(x, y))
    })
}
