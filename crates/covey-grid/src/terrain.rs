//! Fixed-size 2D terrain storage.

use covey_core::{CellKind, SetupError};

/// Row-major array of cell kinds with fixed dimensions.
///
/// Dimensions are validated at construction and never change. Cell
/// access takes `i32` coordinates so that callers can query predicted
/// positions that may be off-grid; [`Terrain::in_bounds`] is the
/// membership test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Terrain {
    rows: u32,
    cols: u32,
    cells: Vec<CellKind>,
}

impl Terrain {
    /// Create an all-[`CellKind::Empty`] terrain.
    ///
    /// Returns `Err(SetupError::EmptyGrid)` if either dimension is zero.
    pub fn new(rows: u32, cols: u32) -> Result<Self, SetupError> {
        if rows == 0 || cols == 0 {
            return Err(SetupError::EmptyGrid);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CellKind::Empty; rows as usize * cols as usize],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Whether `(row, col)` lies within `[0, rows) x [0, cols)`.
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as u32) < self.rows && col >= 0 && (col as u32) < self.cols
    }

    /// The kind of the cell at `(row, col)`.
    ///
    /// Out-of-bounds coordinates are a caller bug; debug builds panic,
    /// release builds return [`CellKind::Wall`] so that a stray read
    /// comes back impassable rather than corrupting movement decisions.
    pub fn kind(&self, row: i32, col: i32) -> CellKind {
        debug_assert!(
            self.in_bounds(row, col),
            "terrain read at ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        if !self.in_bounds(row, col) {
            return CellKind::Wall;
        }
        self.cells[self.flat_index(row, col)]
    }

    /// Set the kind of the cell at `(row, col)`.
    ///
    /// Setup-time only; returns `Err(SetupError::OutOfBounds)` for
    /// coordinates outside the terrain.
    pub fn set_kind(&mut self, row: i32, col: i32, kind: CellKind) -> Result<(), SetupError> {
        if !self.in_bounds(row, col) {
            return Err(SetupError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let index = self.flat_index(row, col);
        self.cells[index] = kind;
        Ok(())
    }

    fn flat_index(&self, row: i32, col: i32) -> usize {
        row as usize * self.cols as usize + col as usize
    }
}
