//! Pieces module - shape matrices, spawning, movement and rotation
//!
//! A piece is a small 0/1 matrix plus a board position and a palette index.
//! Pieces are plain `Copy` values: moving or rotating returns a new piece and
//! never validates it. Callers check the result with
//! [`is_colliding`](crate::collision::is_colliding) before accepting it.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{BOARD_WIDTH, MAX_SHAPE_DIM, SHAPE_COUNT, SHAPE_TEMPLATES};

/// Offset of an occupied cell inside a shape matrix: (column, row)
pub type CellOffset = (i16, i16);

/// Occupied cells of a shape, at most 4x4 of them
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Spawn column: horizontally centered
pub const SPAWN_X: i16 = (BOARD_WIDTH / 2) as i16 - 1;

/// Spawn row: top of the board
pub const SPAWN_Y: i16 = 0;

/// Rectangular occupancy matrix of a piece, up to 4x4.
///
/// The zero-sized shape (`Shape::default()`) stands for a malformed piece:
/// collision treats it as colliding and merge ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    /// `cells[row][col]`; only the top-left `height x width` block is meaningful
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    width: u8,
    height: u8,
}

impl Shape {
    /// Build a shape from rows of 0/1 flags (any non-zero counts as occupied).
    ///
    /// Returns None for empty, ragged or oversized input.
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let t = Shape::from_rows(&[[1u8, 1, 1], [0, 1, 0]]).unwrap();
    /// assert_eq!((t.width(), t.height()), (3, 2));
    /// assert!(Shape::from_rows(&[vec![1u8, 1], vec![1]]).is_none());
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.as_ref().len();
        if width == 0 || width > MAX_SHAPE_DIM || height > MAX_SHAPE_DIM {
            return None;
        }

        let mut shape = Self {
            cells: [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
            width: width as u8,
            height: height as u8,
        };
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            for (c, &flag) in row.iter().enumerate() {
                shape.cells[r][c] = flag != 0;
            }
        }
        Some(shape)
    }

    /// Shape of template `index`, or None if there is no such template.
    pub fn template(index: usize) -> Option<Self> {
        SHAPE_TEMPLATES
            .get(index)
            .and_then(|rows| Self::from_rows(*rows))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// True for the zero-sized (malformed) shape
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether (col, row) is occupied. False outside the matrix.
    pub fn get(&self, col: usize, row: usize) -> bool {
        col < self.width as usize && row < self.height as usize && self.cells[row][col]
    }

    /// Occupied cells as (column, row) offsets, row by row.
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for row in 0..self.height as usize {
            for col in 0..self.width as usize {
                if self.cells[row][col] {
                    out.push((col as i16, row as i16));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise: transpose, then reverse each row.
    ///
    /// The pivot is the matrix corner, not the piece center, so a rotated
    /// piece keeps its origin and its footprint changes from `w x h` to `h x w`.
    pub fn rotated(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut out = Self {
            cells: [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
            width: self.height,
            height: self.width,
        };
        for r in 0..w {
            for c in 0..h {
                out.cells[r][c] = self.cells[h - 1 - c][r];
            }
        }
        out
    }

    /// Row-major 0/1 rows (for display and debugging).
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|r| {
                (0..self.width as usize)
                    .map(|c| u8::from(self.cells[r][c]))
                    .collect()
            })
            .collect()
    }
}

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    /// Board column of the shape's left edge (may be out of bounds before validation)
    pub x: i16,
    /// Board row of the shape's top edge (may be negative before validation)
    pub y: i16,
    /// 0-based palette index
    pub color: u8,
}

impl Piece {
    /// Template `index` at the spawn position, colored with the same index.
    pub fn from_template(index: usize) -> Option<Self> {
        Shape::template(index).map(|shape| Self {
            shape,
            x: SPAWN_X,
            y: SPAWN_Y,
            color: index as u8,
        })
    }

    /// A random template at the spawn position.
    pub fn spawn(rng: &mut SimpleRng) -> Self {
        let index = rng.next_range(SHAPE_COUNT as u32) as usize;
        Self {
            shape: Shape::template(index).unwrap_or_default(),
            x: SPAWN_X,
            y: SPAWN_Y,
            color: index as u8,
        }
    }

    /// Same piece offset by (dx, dy). Not validated.
    pub fn moved(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Same piece with its shape rotated 90° clockwise. Not validated.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }

    /// Absolute board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SQUARE_TEMPLATE;

    #[test]
    fn test_spawn_position_is_centered() {
        assert_eq!(SPAWN_X, 4);
        let piece = Piece::from_template(0).unwrap();
        assert_eq!((piece.x, piece.y), (4, 0));
        assert_eq!(piece.color, 0);
    }

    #[test]
    fn test_spawn_color_matches_template() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..50 {
            let piece = Piece::spawn(&mut rng);
            let expected = Shape::template(piece.color as usize).unwrap();
            assert_eq!(piece.shape, expected);
        }
    }

    #[test]
    fn test_rotate_t_piece() {
        let t = Shape::template(0).unwrap();
        let r = t.rotated();
        assert_eq!(r.to_rows(), vec![vec![0, 1], vec![1, 1], vec![0, 1]]);
    }

    #[test]
    fn test_rotate_i_piece_turns_vertical() {
        let i = Shape::template(4).unwrap();
        let r = i.rotated();
        assert_eq!((r.width(), r.height()), (1, 4));
        assert_eq!(r.rotated(), i);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for index in 0..SHAPE_COUNT {
            let shape = Shape::template(index).unwrap();
            let back = shape.rotated().rotated().rotated().rotated();
            assert_eq!(back, shape, "template {}", index);
        }
    }

    #[test]
    fn test_square_rotation_is_stable() {
        let square = Shape::template(SQUARE_TEMPLATE).unwrap();
        assert_eq!(square.rotated(), square);
        assert_eq!(square.rotated().rotated(), square);
    }

    #[test]
    fn test_moved_keeps_shape_and_color() {
        let piece = Piece::from_template(3).unwrap();
        let moved = piece.moved(-2, 3);
        assert_eq!((moved.x, moved.y), (2, 3));
        assert_eq!(moved.shape, piece.shape);
        assert_eq!(moved.color, piece.color);
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        let empty: [[u8; 0]; 0] = [];
        assert!(Shape::from_rows(&empty).is_none());
        assert!(Shape::from_rows(&[[0u8; 0]]).is_none());
        assert!(Shape::from_rows(&[[1u8; 5]]).is_none());
        assert!(Shape::template(SHAPE_COUNT).is_none());
    }

    #[test]
    fn test_piece_cells_are_absolute() {
        let piece = Piece::from_template(SQUARE_TEMPLATE).unwrap().moved(1, 2);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(5, 2), (6, 2), (5, 3), (6, 3)]);
    }
}
