/// Side length of the main board.
pub const BOARD_SIZE: usize = 10;
/// Every ship occupies this many contiguous cells.
pub const SHIP_LENGTH: usize = 3;
/// Side length of the ability pattern matrices.
pub const ABILITY_SIZE: usize = 5;
/// Ships placed with horizontal or vertical orientation.
pub const STRAIGHT_SHIPS: usize = 2;
/// Ships placed with diagonal orientation.
pub const DIAGONAL_SHIPS: usize = 2;
/// Default attempt budget for random fleet placement.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Fixed ship cells used by the ability demonstration scenario.
pub const DEMO_SHIP_CELLS: [(usize, usize); 8] = [
    (2, 2),
    (2, 3),
    (2, 4),
    (5, 7),
    (6, 7),
    (7, 7),
    (9, 0),
    (9, 1),
];
