//! Board module - manages the game grid
//!
//! The board is a 10x22 grid where each cell holds a [`ShapeKind`]
//! (`Empty` when free). Uses a flat array for cache locality and
//! zero-allocation row compaction.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..21
//! (bottom to top).

use arrayvec::ArrayVec;

use crate::types::{Cell, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one compaction pass, bottom to top.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x), row 0 at the bottom
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [ShapeKind::Empty; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Shape tag at (x, y), or `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(ShapeKind::Empty))
    }

    /// In bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(kind) if !kind.is_empty())
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Every column of row `y` is non-empty
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| !cell.is_empty())
    }

    /// Remove every full row and compact the rest downward.
    ///
    /// All full rows are identified before anything moves, so the result is
    /// a simultaneous multi-line clear. Vacated rows at the top become empty.
    /// Returns the removed row indices (as they were before the clear),
    /// sorted bottom to top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let width = BOARD_WIDTH as usize;
        let height = BOARD_HEIGHT as usize;

        let mut cleared_rows = ClearedRows::new();
        for y in 0..height {
            if self.is_row_full(y) {
                cleared_rows.push(y);
            }
        }
        if cleared_rows.is_empty() {
            return cleared_rows;
        }

        // Two pointers from the bottom: every kept row is copied onto the
        // lowest row not yet written.
        let mut write_y = 0;
        for read_y in 0..height {
            if cleared_rows.contains(&read_y) {
                continue;
            }
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
            write_y += 1;
        }

        self.cells[write_y * width..].fill(ShapeKind::Empty);

        cleared_rows
    }

    /// Number of non-empty cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Row `y` as a slice, or `None` if out of bounds
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset every cell to `Empty`
    pub fn clear(&mut self) {
        self.cells.fill(ShapeKind::Empty);
    }

    /// Write the grid as numeric tags into `out`, indexed `[y][x]` with row 0 at the bottom.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            for (x, value) in row.iter_mut().enumerate() {
                *value = self.cells[start + x].index();
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
