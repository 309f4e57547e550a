//! Common types: cell states and the error enums shared across the crate.

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Open water, the initial state of every cell.
    #[default]
    Water,
    /// Part of a placed ship.
    Ship,
    /// Inside the area of effect of an overlaid ability.
    Affected,
}

impl Cell {
    /// Glyph used when rendering the board to text.
    pub fn glyph(&self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Ship => '#',
            Cell::Affected => '@',
        }
    }
}

/// Errors returned by checked grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is out of bounds [0..N).
    OutOfBounds { row: usize, col: usize },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// Errors returned by the random fleet placement driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The attempt budget ran out before every ship was placed.
    AttemptsExhausted { placed: usize, attempts: usize },
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::AttemptsExhausted { placed, attempts } => {
                write!(
                    f,
                    "unable to place fleet: {} ships placed after {} attempts",
                    placed, attempts
                )
            }
        }
    }
}
