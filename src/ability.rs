//! Ability area-of-effect patterns generated from geometric predicates.
//!
//! Patterns are small fixed-size boolean matrices built independently of
//! any board; the cell at (M/2, M/2) is the alignment point used by the
//! overlay projection.

use core::fmt;

/// A fixed M×M matrix of "affects this relative cell" flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern<const M: usize> {
    cells: [[bool; M]; M],
}

impl<const M: usize> Pattern<M> {
    /// Row and column of the alignment point.
    pub const CENTER: usize = M / 2;

    /// Build a pattern by evaluating `affects(i, j)` over every cell.
    pub fn from_predicate<F>(affects: F) -> Self
    where
        F: Fn(usize, usize) -> bool,
    {
        let mut cells = [[false; M]; M];
        for (i, row) in cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = affects(i, j);
            }
        }
        Pattern { cells }
    }

    /// Whether the pattern affects relative cell (i, j). Indices outside
    /// the matrix are reported as unaffected.
    pub fn affects(&self, i: usize, j: usize) -> bool {
        self.cells
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(false)
    }

    /// Total number of affected cells.
    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&b| b).count()
    }
}

impl<const M: usize> fmt::Display for Pattern<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for &b in row {
                write!(f, "{} ", if b { '*' } else { '.' })?;
            }
            if i + 1 < M {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Ability shapes available to the demonstration scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Triangle widening downward from a single cell in the top row.
    Cone,
    /// Full middle row plus full middle column.
    Cross,
    /// Diamond bounded by Manhattan distance from the center.
    Diamond,
}

impl Shape {
    /// Generate the pattern matrix for this shape.
    pub fn pattern<const M: usize>(&self) -> Pattern<M> {
        let center = M / 2;
        match self {
            // widens by one cell on each side per row, `j + i` keeps the
            // left edge comparison in unsigned arithmetic
            Shape::Cone => Pattern::from_predicate(|i, j| j + i >= center && j <= center + i),
            Shape::Cross => Pattern::from_predicate(|i, j| i == center || j == center),
            Shape::Diamond => {
                Pattern::from_predicate(|i, j| i.abs_diff(center) + j.abs_diff(center) <= center)
            }
        }
    }
}
