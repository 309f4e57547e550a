//! Clipped projection of ability patterns onto the board.

use crate::ability::Pattern;
use crate::common::Cell;
use crate::grid::Grid;

/// Stamp `pattern` onto `grid` with its center over (origin_row, origin_col).
///
/// Affected cells overwrite whatever was there, ships included; a ship
/// under an ability area becomes indistinguishable from open affected
/// water in the rendered output, which is the scenario's intended
/// behavior. Pattern cells that map outside the board are skipped.
pub fn overlay<const N: usize, const M: usize>(
    grid: &mut Grid<N>,
    pattern: &Pattern<M>,
    origin_row: usize,
    origin_col: usize,
) {
    let offset = Pattern::<M>::CENTER as isize;
    for i in 0..M {
        for j in 0..M {
            if !pattern.affects(i, j) {
                continue;
            }
            let row = origin_row as isize - offset + i as isize;
            let col = origin_col as isize - offset + j as isize;
            if !Grid::<N>::in_bounds(row, col) {
                continue;
            }
            let _ = grid.set(row as usize, col as usize, Cell::Affected);
        }
    }
}
