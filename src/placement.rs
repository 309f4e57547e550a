//! Ship placement: validation, writes, and the random fleet driver.

use log::debug;
use rand::Rng;

use crate::common::{Cell, GridError, PlacementError};
use crate::config::{DIAGONAL_SHIPS, SHIP_LENGTH, STRAIGHT_SHIPS};
use crate::grid::Grid;
use crate::ship::{sample_orientation, Orientation};

/// Check whether a ship anchored at (row, col) fits along `orientation`.
///
/// Walks all [`SHIP_LENGTH`] step targets; any target off the board or
/// already holding a ship makes the whole placement invalid.
pub fn validate_placement<const N: usize>(
    grid: &Grid<N>,
    row: usize,
    col: usize,
    orientation: Orientation,
) -> bool {
    (0..SHIP_LENGTH).all(|i| {
        let (r, c) = orientation.step(row, col, i);
        matches!(grid.cell_at(r, c), Some(cell) if cell != Cell::Ship)
    })
}

/// Place a ship anchored at (row, col) along `orientation`.
///
/// Returns `true` and writes all [`SHIP_LENGTH`] cells on success; returns
/// `false` and leaves the grid untouched when validation fails.
pub fn place_ship<const N: usize>(
    grid: &mut Grid<N>,
    row: usize,
    col: usize,
    orientation: Orientation,
) -> bool {
    if !validate_placement(grid, row, col, orientation) {
        return false;
    }
    for i in 0..SHIP_LENGTH {
        let (r, c) = orientation.step(row, col, i);
        // validated above, every step target is on the board
        let _ = grid.set(r as usize, c as usize, Cell::Ship);
    }
    true
}

/// Randomly place [`STRAIGHT_SHIPS`] straight and [`DIAGONAL_SHIPS`]
/// diagonal ships, retrying failed placements up to `max_attempts` times
/// across the whole fleet.
///
/// The retry loop terminates only probabilistically on an open board; the
/// budget turns a crowded board into an observable
/// [`PlacementError::AttemptsExhausted`] instead of a hang.
pub fn place_random_fleet<R: Rng, const N: usize>(
    grid: &mut Grid<N>,
    rng: &mut R,
    max_attempts: usize,
) -> Result<(), PlacementError> {
    let goal = STRAIGHT_SHIPS + DIAGONAL_SHIPS;
    let mut placed = 0;
    let mut attempts = 0;
    while placed < goal {
        if attempts >= max_attempts {
            return Err(PlacementError::AttemptsExhausted { placed, attempts });
        }
        attempts += 1;
        let set = if placed < STRAIGHT_SHIPS {
            &Orientation::STRAIGHT
        } else {
            &Orientation::DIAGONAL
        };
        let row = rng.random_range(0..N);
        let col = rng.random_range(0..N);
        let orientation = sample_orientation(rng, set);
        if place_ship(grid, row, col, orientation) {
            placed += 1;
            debug!(
                "placed ship {}/{} at ({}, {}) {:?}, attempt {}",
                placed, goal, row, col, orientation, attempts
            );
        }
    }
    Ok(())
}

/// Write the fixed ship cells used by the ability demonstration scenario.
pub fn place_fixed_ships<const N: usize>(
    grid: &mut Grid<N>,
    cells: &[(usize, usize)],
) -> Result<(), GridError> {
    for &(row, col) in cells {
        grid.set(row, col, Cell::Ship)?;
    }
    Ok(())
}
