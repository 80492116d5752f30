//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind,
//! plus two hidden rows above the playfield where pieces spawn.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges -2..19 (top to bottom).
//! Rows above the hidden area are not stored and always read as free.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS};

/// Number of stored rows (hidden + visible)
const STORED_ROWS: usize = (BOARD_HEIGHT + HIDDEN_ROWS) as usize;

/// Total number of stored cells
const BOARD_SIZE: usize = BOARD_WIDTH as usize * STORED_ROWS;

/// Row indices cleared by a single pass, bottom to top.
pub type ClearedRows = ArrayVec<i8, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x (2 hidden + 20 visible) rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order ((y + HIDDEN_ROWS) * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        let row = y as i16 + HIDDEN_ROWS as i16;
        if x < 0 || x >= BOARD_WIDTH as i8 || row < 0 || row >= STORED_ROWS as i16 {
            return None;
        }
        Some(row as usize * BOARD_WIDTH as usize + x as usize)
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get visible height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if the cell is not stored (off the sides, below, or above the hidden rows)
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if the cell is not stored
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether a piece cell may occupy (x, y).
    ///
    /// The left, right and bottom edges are walls. There is no ceiling:
    /// anything above the hidden rows is open space.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        match self.get(x, y) {
            Some(cell) => cell.is_none(),
            None => true,
        }
    }

    /// Check if position is occupied (stored and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a visible row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        if y < 0 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    fn row(&self, y: i8) -> &[Cell] {
        let start = (y as i16 + HIDDEN_ROWS as i16) as usize * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Clear all full visible rows and return the row indices that were cleared
    /// (sorted bottom to top).
    ///
    /// Uses a two-pointer compaction: surviving rows keep their relative order,
    /// and the vacated rows at the top are emptied.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write = STORED_ROWS;

        // Scan stored rows from bottom to top
        for read in (0..STORED_ROWS).rev() {
            let y = read as i8 - HIDDEN_ROWS as i8;
            if self.is_row_full(y) {
                cleared_rows.push(y);
            } else {
                write -= 1;
                if write != read {
                    self.cells
                        .copy_within(read * width..(read + 1) * width, write * width);
                }
            }
        }

        // Pad the top with empty rows
        for cell in &mut self.cells[..write * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Check whether every offset of `shape` anchored at (x, y) is free
    ///
    /// A cell whose coordinates overflow `i8` never fits.
    pub fn fits(&self, shape: impl IntoIterator<Item = (i8, i8)>, x: i8, y: i8) -> bool {
        shape.into_iter().all(|(dx, dy)| match cell_at(x, y, dx, dy) {
            Some((px, py)) => self.is_free(px, py),
            None => false,
        })
    }

    /// Lock a piece onto the board at given position with given shape
    ///
    /// Returns false (and writes nothing) if any cell is out of bounds, above the
    /// visible playfield, or occupied.
    pub fn lock_piece(&mut self, shape: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) -> bool {
        // First check if all positions are lockable
        for &(dx, dy) in shape {
            match cell_at(x, y, dx, dy) {
                Some((px, py)) if py >= 0 && self.is_free(px, py) => {}
                _ => return false,
            }
        }

        for &(dx, dy) in shape {
            if let Some((px, py)) = cell_at(x, y, dx, dy) {
                self.set(px, py, Some(kind));
            }
        }

        true
    }

    /// Write the visible rows as `u8` codes (0 = empty) into `out`.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (dst, cell) in row.iter_mut().zip(self.row(y as i8)) {
                *dst = cell.map_or(0, |kind| kind.code());
            }
        }
    }

    /// Number of filled cells, hidden rows included.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check whether no cell is filled
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Create from visible rows for testing (hidden rows start empty)
    #[cfg(test)]
    pub fn from_rows(rows: &[[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                board.set(x as i8, y as i8, PieceKind::from_code(code));
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Absolute position of shape offset (dx, dy) anchored at (x, y), or `None` on overflow.
#[inline]
pub fn cell_at(x: i8, y: i8, dx: i8, dy: i8) -> Option<(i8, i8)> {
    Some((x.checked_add(dx)?, y.checked_add(dy)?))
}
