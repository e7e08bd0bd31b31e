//! Board module - manages the game grid
//!
//! The board is a WIDTH x HEIGHT grid (12x20 by default) where each cell is
//! empty (0) or occupied (nonzero). Cells live in a flat row-major vector that
//! is allocated once; dimensions never change after creation.
//! Coordinates: (x, y) where x grows to the right and y grows downward, row 0
//! is the top.

use crate::config::{ConfigError, SessionConfig};
use crate::pieces::Shape;
use crate::types::{Cell, EMPTY, FILLED};

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the default 12x20 dimensions
    pub fn new() -> Self {
        Self::empty(SessionConfig::default())
    }

    /// Create a new empty board with the given dimensions
    pub fn with_size(width: u8, height: u8) -> Result<Self, ConfigError> {
        let config = SessionConfig::new(width, height);
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: SessionConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            cells: vec![EMPTY; config.width as usize * config.height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and nonzero)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|&cell| cell != EMPTY))
            .unwrap_or(false)
    }

    /// Cells of row `y`, if it exists
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Set every cell of row `y`
    pub fn fill_row(&mut self, y: usize, cell: Cell) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let width = self.width as usize;
        let start = y * width;
        self.cells[start..start + width].fill(cell);
        true
    }

    /// Remove row `y` and shift all rows above down by one
    /// Row 0 becomes empty.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }

        let width = self.width as usize;
        // Rows 0..y move down by one row as a single block.
        self.cells.copy_within(..y * width, width);
        self.cells[..width].fill(EMPTY);
        true
    }

    /// Clear all full rows and return how many were removed
    ///
    /// Scans bottom to top. After a clear the same row index is examined again,
    /// since the row above has just shifted into it; the scan only moves up
    /// past rows that are not full. Stacked full rows therefore all clear in
    /// one call.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = self.height as usize;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Check whether `shape` placed with its top-left corner at (x, y) collides
    ///
    /// A cell collides when it is left of column 0, right of the last column,
    /// below the last row, or on an occupied cell. Cells above the top (y < 0)
    /// never collide with board contents.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.occupied().iter().any(|&(dx, dy)| {
            let px = x as i16 + dx as i16;
            let py = y as i16 + dy as i16;
            if px < 0 || px >= self.width as i16 || py >= self.height as i16 {
                return true;
            }
            py >= 0 && self.is_occupied(px as i8, py as i8)
        })
    }

    /// Write `shape` into the board at (x, y) with the [`FILLED`] marker
    ///
    /// Cells that fall outside the board are skipped. Returns the number of
    /// cells written.
    pub fn lock(&mut self, shape: &Shape, x: i8, y: i8) -> usize {
        let mut written = 0;
        for &(dx, dy) in shape.occupied().iter() {
            let px = x as i16 + dx as i16;
            let py = y as i16 + dy as i16;
            if px < 0 || py < 0 || px > i8::MAX as i16 || py > i8::MAX as i16 {
                continue;
            }
            if self.set(px as i8, py as i8, FILLED) {
                written += 1;
            }
        }
        written
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the cells into `out`, reusing its allocation
    pub fn write_into(&self, out: &mut Vec<Cell>) {
        out.clear();
        out.extend_from_slice(&self.cells);
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
