//! Grid module - the cell storage behind a board
//!
//! The grid is `width` columns by `height` rows, stored as a flat row-major vector for cache
//! locality. Coordinates are `(x, y)` with `x` growing rightward and `y` growing upward, so row 0
//! is the floor. Hidden rows are just the topmost rows; the grid does not distinguish them.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind};

/// Maximum number of rows a single lock can complete (a piece spans at most 4 rows)
pub const MAX_CLEARED_ROWS: usize = 4;

/// The cell grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height || self.width == 0 {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Check if a row holds no terrain at all
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= self.height {
            return true;
        }
        self.row(y).iter().all(|cell| cell.is_none())
    }

    /// Clear all full rows and compact the surviving terrain downward.
    ///
    /// Returns the cleared row indices, bottom to top. When no row is full the grid is left
    /// untouched. Otherwise full rows are dropped, every remaining non-empty row slides down to
    /// the lowest free slot keeping its relative order, and the vacated rows at the top become
    /// empty.
    ///
    /// Every full row is cleared, but only the lowest [`MAX_CLEARED_ROWS`] indices are reported.
    /// A board clears after every lock, so it never has more full rows than that.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let mut any_full = false;
        for y in 0..self.height {
            if self.is_row_full(y) {
                any_full = true;
                let _ = cleared_rows.try_push(y);
            }
        }
        if !any_full {
            return cleared_rows;
        }

        let width = self.width;
        let mut write_y = 0;

        // Scan from the floor up; full and empty rows are skipped.
        for read_y in 0..self.height {
            if self.is_row_full(read_y) || self.is_row_empty(read_y) {
                continue;
            }
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
            write_y += 1;
        }

        for cell in &mut self.cells[write_y * width..] {
            *cell = None;
        }

        cleared_rows
    }

    /// Lock a piece's cells onto the grid
    /// Returns true if successful, false if any cell is out of bounds or occupied.
    /// Nothing is written on failure.
    pub fn lock_piece(&mut self, cells: &[(i32, i32)], kind: PieceKind) -> bool {
        if !cells.iter().all(|&(x, y)| self.is_valid(x, y)) {
            return false;
        }

        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }

        true
    }

    /// Get a reference to the internal cells array (row-major, floor row first)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from the floor up
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }
}
