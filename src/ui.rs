//! Console rendering of board state.

use std::fmt::Write as _;

use crate::grid::Grid;

/// Render `grid` as glyph rows: a column-index header, then one line per
/// row prefixed with its index, two characters per cell.
pub fn render_board<const N: usize>(grid: &Grid<N>) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..N {
        let _ = write!(out, "{:<2}", c);
    }
    out.push('\n');
    for r in 0..N {
        let _ = write!(out, "{:2} ", r);
        for c in 0..N {
            // row index is in range, get cannot fail
            let glyph = grid.get(r, c).map(|cell| cell.glyph()).unwrap_or('?');
            let _ = write!(out, "{} ", glyph);
        }
        out.push('\n');
    }
    out
}

/// Print the rendered board to stdout.
pub fn print_board<const N: usize>(grid: &Grid<N>) {
    print!("{}", render_board(grid));
}
