//! A fixed-size board grid using const generics.
//!
//! The board is an `N×N` matrix of [`Cell`] states held inline, no heap
//! allocation. Access is bounds-checked: out-of-range indices are reported
//! as [`GridError::OutOfBounds`] before any mutation happens.

use core::fmt;

use crate::common::{Cell, GridError};
use crate::config::BOARD_SIZE;

/// The standard 10×10 board used by the demonstration scenarios.
pub type Board = Grid<BOARD_SIZE>;

/// A fixed N×N grid of cell states.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<const N: usize> {
    cells: [[Cell; N]; N],
}

impl<const N: usize> Grid<N> {
    /// Create a new all-water grid.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Water; N]; N],
        }
    }

    /// Board side length.
    pub const fn size(&self) -> usize {
        N
    }

    /// Reset every cell back to water.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Water; N]; N];
    }

    /// Cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Write `cell` at (row, col).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Returns `true` when the signed coordinates land on the board.
    /// Negative coordinates never wrap.
    pub fn in_bounds(row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < N && (col as usize) < N
    }

    /// Cell at signed coordinates, `None` when off the board.
    pub fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if Self::in_bounds(row, col) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    /// Number of cells currently holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Iterator over `(row, col, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &cell)| (r, c, cell))
        })
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= N || col >= N {
            Err(GridError::OutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl<const N: usize> Default for Grid<N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", N)?;
        fmt::Display::fmt(self, f)
    }
}

impl<const N: usize> fmt::Display for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
