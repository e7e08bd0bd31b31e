//! Pieces module - shape templates and rotation
//!
//! A shape is a small 0/1 matrix inside its own bounding box (at most 4x4).
//! Rotation transforms the matrix itself, so the bounding box changes
//! (a 2x3 T becomes 3x2). There are no wall kicks: a rotation either fits at
//! the current origin or is discarded by the caller.

use arrayvec::ArrayVec;
use serde::{Serialize, Serializer};

use crate::types::PieceKind;

/// Largest bounding box side of any shape
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of an occupied cell relative to the shape's top-left corner (dx, dy)
pub type CellOffset = (i8, i8);

/// Piece shape matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    const fn new(rows: u8, cols: u8, cells: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM]) -> Self {
        Self { rows, cols, cells }
    }

    /// Build a shape from row slices.
    ///
    /// Returns `None` if the matrix is empty, ragged, or larger than 4x4.
    /// Nonzero entries are normalized to 1.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SHAPE_DIM || width == 0 || width > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }

        let mut cells = [[0u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = u8::from(v != 0);
            }
        }
        Some(Self::new(height as u8, width as u8, cells))
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Value at (row, col); 0 outside the bounding box.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row >= self.rows as usize || col >= self.cols as usize {
            return 0;
        }
        self.cells[row][col]
    }

    /// Rotate 90° clockwise: `rotated[i][j] = shape[rows - 1 - j][i]`.
    pub fn rotated_cw(&self) -> Shape {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[0u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }
        Shape::new(self.cols, self.rows, cells)
    }

    /// Offsets of all occupied cells, row by row.
    pub fn occupied(&self) -> ArrayVec<CellOffset, 16> {
        let mut out = ArrayVec::new();
        for y in 0..self.rows as usize {
            for x in 0..self.cols as usize {
                if self.cells[y][x] != 0 {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Row slices of the matrix (trimmed to the bounding box).
    pub fn row_slices(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells[..self.rows as usize]
            .iter()
            .map(move |r| &r[..self.cols as usize])
    }

    /// Copy out as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.row_slices().map(|r| r.to_vec()).collect()
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.row_slices())
    }
}

const I_SHAPE: Shape = Shape::new(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);
const O_SHAPE: Shape = Shape::new(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const T_SHAPE: Shape = Shape::new(2, 3, [[1, 1, 1, 0], [0, 1, 0, 0], [0; 4], [0; 4]]);
const L_SHAPE: Shape = Shape::new(2, 3, [[1, 1, 1, 0], [1, 0, 0, 0], [0; 4], [0; 4]]);
const J_SHAPE: Shape = Shape::new(2, 3, [[1, 1, 1, 0], [0, 0, 1, 0], [0; 4], [0; 4]]);
const S_SHAPE: Shape = Shape::new(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);
const Z_SHAPE: Shape = Shape::new(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);

/// Spawn template for a piece kind
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Horizontally centered spawn column: `floor((width - cols) / 2)`.
pub fn spawn_x(board_width: u8, shape: &Shape) -> i8 {
    ((board_width as i16 - shape.cols() as i16).div_euclid(2)) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_have_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(template(kind).occupied().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn t_rotates_clockwise() {
        let rotated = template(PieceKind::T).rotated_cw();
        assert_eq!(rotated.rows(), 3);
        assert_eq!(rotated.cols(), 2);
        assert_eq!(rotated.to_rows(), vec![vec![0, 1], vec![1, 1], vec![0, 1]]);
    }

    #[test]
    fn i_rotates_to_vertical() {
        let rotated = template(PieceKind::I).rotated_cw();
        assert_eq!(rotated.to_rows(), vec![vec![1], vec![1], vec![1], vec![1]]);
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let s = template(kind);
            assert_eq!(s.rotated_cw().rotated_cw().rotated_cw().rotated_cw(), s);
        }
    }

    #[test]
    fn from_rows_rejects_ragged_and_oversized() {
        assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
        assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
        assert!(Shape::from_rows(&[]).is_none());
        assert_eq!(
            Shape::from_rows(&[&[1, 1], &[1, 1]]),
            Some(template(PieceKind::O))
        );
    }

    #[test]
    fn spawn_x_is_centered() {
        assert_eq!(spawn_x(12, &template(PieceKind::O)), 5);
        assert_eq!(spawn_x(12, &template(PieceKind::I)), 4);
        assert_eq!(spawn_x(12, &template(PieceKind::T)), 4);
        assert_eq!(spawn_x(10, &template(PieceKind::T)), 3);
    }
}
