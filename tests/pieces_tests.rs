//! Pieces tests - templates, clockwise rotation and spawn columns

use blockfall::core::{spawn_x, template, Shape};
use blockfall::types::{PieceKind, BOARD_WIDTH};

#[test]
fn test_templates() {
    assert_eq!(template(PieceKind::I).to_rows(), vec![vec![1, 1, 1, 1]]);
    assert_eq!(template(PieceKind::O).to_rows(), vec![vec![1, 1], vec![1, 1]]);
    assert_eq!(
        template(PieceKind::T).to_rows(),
        vec![vec![1, 1, 1], vec![0, 1, 0]]
    );
    assert_eq!(
        template(PieceKind::L).to_rows(),
        vec![vec![1, 1, 1], vec![1, 0, 0]]
    );
    assert_eq!(
        template(PieceKind::J).to_rows(),
        vec![vec![1, 1, 1], vec![0, 0, 1]]
    );
    assert_eq!(
        template(PieceKind::S).to_rows(),
        vec![vec![1, 1, 0], vec![0, 1, 1]]
    );
    assert_eq!(
        template(PieceKind::Z).to_rows(),
        vec![vec![0, 1, 1], vec![1, 1, 0]]
    );
}

#[test]
fn test_t_rotates_clockwise() {
    let t = template(PieceKind::T).rotated_cw();
    assert_eq!((t.rows(), t.cols()), (3, 2));
    assert_eq!(t.to_rows(), vec![vec![0, 1], vec![1, 1], vec![0, 1]]);
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let shape = template(kind);
        let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let shape = template(kind);
        let r = shape.rotated_cw();
        assert_eq!((r.rows(), r.cols()), (shape.cols(), shape.rows()));
        assert_eq!(r.occupied().len(), 4);
    }
}

#[test]
fn test_spawn_columns_on_default_board() {
    assert_eq!(spawn_x(BOARD_WIDTH, &template(PieceKind::I)), 4);
    assert_eq!(spawn_x(BOARD_WIDTH, &template(PieceKind::O)), 5);
    assert_eq!(spawn_x(BOARD_WIDTH, &template(PieceKind::T)), 4);
    // Odd leftover rounds down.
    assert_eq!(spawn_x(7, &template(PieceKind::O)), 2);
}

#[test]
fn test_from_rows_rejects_bad_matrices() {
    assert!(Shape::from_rows(&[]).is_none());
    assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());

    let s = Shape::from_rows(&[&[0, 2], &[3, 0]]).unwrap();
    assert_eq!(s.to_rows(), vec![vec![0, 1], vec![1, 0]]);
}
