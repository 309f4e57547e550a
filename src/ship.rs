//! Ship geometry: orientations and their per-step offsets.

use rand::Rng;

/// Orientation of a ship extending from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Orientation {
    /// Orientations sampled for the straight pair of ships.
    pub const STRAIGHT: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
    /// Orientations sampled for the diagonal pair of ships.
    pub const DIAGONAL: [Orientation; 2] = [Orientation::DiagonalDown, Orientation::DiagonalUp];

    /// Per-step (Δrow, Δcol) offset along the ship.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalUp => (1, -1),
        }
    }

    /// Cell targeted by step `i` from the anchor (row, col). The result may
    /// lie off the board; `DiagonalUp` goes below column zero near the left
    /// edge, which is why the coordinates stay signed here.
    pub fn step(&self, row: usize, col: usize, i: usize) -> (isize, isize) {
        let (dr, dc) = self.offset();
        (
            row as isize + dr * i as isize,
            col as isize + dc * i as isize,
        )
    }
}

/// Sample one orientation uniformly from `set`.
pub fn sample_orientation<R: Rng>(rng: &mut R, set: &[Orientation]) -> Orientation {
    set[rng.random_range(0..set.len())]
}
