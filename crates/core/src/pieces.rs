//! Pieces module - tetromino shape matrices and rotation
//!
//! Each piece is a small square boolean matrix. Rotation is a pure geometric
//! transform over that matrix: it never mutates the shape table, it returns a new
//! [`Shape`]. There is no wall-kick table; a rotation that collides is simply rejected
//! by the engine. Non-square pieces rotate inside their fixed bounding box, so the
//! visible cells can shift sideways by one column.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest matrix side length (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square occupancy matrix of a piece in one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Side length of the bounding matrix.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at (row, col) of the matrix is filled.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size as usize && col < self.size as usize && self.cells[row][col]
    }

    /// Filled cells as `(dx, dy)` offsets from the top-left anchor, row by row.
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |row| {
            (0..n)
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// Rotate 90° clockwise: `rotated[r][c] = self[n - 1 - c][r]`.
    pub fn rotate_cw(&self) -> Self {
        let n = self.size as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in cells.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - c][r];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }
}

const I_SHAPE: Shape = Shape::from_rows([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
const J_SHAPE: Shape = Shape::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]);
const L_SHAPE: Shape = Shape::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]);
const O_SHAPE: Shape = Shape::from_rows([[1, 1], [1, 1]]);
const S_SHAPE: Shape = Shape::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]);
const Z_SHAPE: Shape = Shape::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]);
const T_SHAPE: Shape = Shape::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]);

/// Get the spawn orientation for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::T => T_SHAPE,
    }
}

/// Spawn anchor (x, y) for a piece kind.
///
/// Horizontally centered (`width / 2 - ceil(size / 2)`). The I piece starts one row
/// lower than the rest because its filled row is the second row of its matrix; either
/// way the piece enters view from the hidden rows.
pub fn spawn_position(kind: PieceKind) -> (i8, i8) {
    let size = get_shape(kind).size() as i8;
    let x = BOARD_WIDTH as i8 / 2 - (size + 1) / 2;
    let y = if kind == PieceKind::I { -1 } else { -2 };
    (x, y)
}
