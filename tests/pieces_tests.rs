//! Piece and rotation tests

use blockfall::core::{Piece, Shape, SimpleRng, SPAWN_X, SPAWN_Y};
use blockfall::types::{SHAPE_COUNT, SHAPE_TEMPLATES, SQUARE_TEMPLATE};

#[test]
fn test_every_template_has_four_cells() {
    for i in 0..SHAPE_COUNT {
        let shape = Shape::template(i).unwrap();
        assert_eq!(shape.cells().len(), 4, "template {i}");
        assert_eq!(shape.height() as usize, SHAPE_TEMPLATES[i].len());
    }
    assert!(Shape::template(SHAPE_COUNT).is_none());
}

#[test]
fn test_spawn_position_and_color() {
    let mut rng = SimpleRng::new(99);
    for _ in 0..50 {
        let piece = Piece::spawn(&mut rng);
        assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
        assert_eq!((piece.x, piece.y), (4, 0));
        assert!((piece.color as usize) < SHAPE_COUNT);
        assert_eq!(Some(piece.shape), Shape::template(piece.color as usize));
    }
}

#[test]
fn test_spawn_is_deterministic_per_seed() {
    let mut a = SimpleRng::new(2024);
    let mut b = SimpleRng::new(2024);
    let seq_a: Vec<u8> = (0..20).map(|_| Piece::spawn(&mut a).color).collect();
    let seq_b: Vec<u8> = (0..20).map(|_| Piece::spawn(&mut b).color).collect();
    assert_eq!(seq_a, seq_b);
}

#[test]
fn test_rotate_square_twice_is_identity() {
    let square = Shape::template(SQUARE_TEMPLATE).unwrap();
    assert_eq!(square.rotated().rotated(), square);
    assert_eq!(square.rotated(), square);
}

#[test]
fn test_rotate_four_times_is_identity() {
    for i in 0..SHAPE_COUNT {
        let shape = Shape::template(i).unwrap();
        let back = shape.rotated().rotated().rotated().rotated();
        assert_eq!(back, shape, "template {i}");
    }
}

#[test]
fn test_rotate_swaps_dimensions() {
    let bar = Shape::template(4).unwrap();
    assert_eq!((bar.width(), bar.height()), (4, 1));
    let upright = bar.rotated();
    assert_eq!((upright.width(), upright.height()), (1, 4));
    assert_eq!(upright.to_rows(), vec![vec![1], vec![1], vec![1], vec![1]]);
}

#[test]
fn test_rotate_t_clockwise() {
    let t = Shape::template(0).unwrap();
    assert_eq!(t.to_rows(), vec![vec![1, 1, 1], vec![0, 1, 0]]);
    assert_eq!(t.rotated().to_rows(), vec![vec![0, 1], vec![1, 1], vec![0, 1]]);
}

#[test]
fn test_piece_rotation_keeps_origin() {
    let piece = Piece::from_template(5).unwrap().moved(2, 3);
    let rotated = piece.rotated();
    assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
    assert_eq!(rotated.color, piece.color);
    assert_eq!(rotated.shape, piece.shape.rotated());
}

#[test]
fn test_piece_cells_are_absolute() {
    let mut piece = Piece::from_template(SQUARE_TEMPLATE).unwrap();
    piece.x = 3;
    piece.y = 7;
    let cells: Vec<(i16, i16)> = piece.cells().collect();
    assert_eq!(cells, vec![(3, 7), (4, 7), (3, 8), (4, 8)]);
}

#[test]
fn test_from_rows_rejects_bad_input() {
    let empty: [[u8; 0]; 0] = [];
    assert!(Shape::from_rows(&empty).is_none());
    assert!(Shape::from_rows(&[[1u8, 1, 1, 1, 1]]).is_none());
    assert!(Shape::from_rows(&[vec![1u8], vec![1, 1]]).is_none());
    assert!(Shape::from_rows(&[[1u8; 4]; 5]).is_none());
}
