use batalha_naval::{overlay, place_ship, Board, Cell, Orientation, Pattern, Shape, ABILITY_SIZE};

#[test]
fn test_cross_overlay_centered_on_board() {
    let mut board = Board::new();
    let pattern: Pattern<ABILITY_SIZE> = Shape::Cross.pattern();
    overlay(&mut board, &pattern, 6, 6);
    assert_eq!(board.get(6, 6).unwrap(), Cell::Affected);
    assert_eq!(board.get(4, 6).unwrap(), Cell::Affected);
    assert_eq!(board.get(8, 6).unwrap(), Cell::Affected);
    assert_eq!(board.get(6, 4).unwrap(), Cell::Affected);
    assert_eq!(board.get(6, 8).unwrap(), Cell::Affected);
    assert_eq!(board.get(5, 5).unwrap(), Cell::Water);
    // fully inside the board, every pattern cell lands
    assert_eq!(board.count(Cell::Affected), pattern.count());
}

#[test]
fn test_overlay_clips_at_corner() {
    let mut board = Board::new();
    let pattern: Pattern<ABILITY_SIZE> = Shape::Diamond.pattern();
    overlay(&mut board, &pattern, 0, 0);
    // only the lower-right quarter of the diamond survives clipping
    assert_eq!(board.count(Cell::Affected), 6);
    for (r, c) in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 0)] {
        assert_eq!(board.get(r, c).unwrap(), Cell::Affected);
    }
    assert_eq!(board.get(2, 1).unwrap(), Cell::Water);
}

#[test]
fn test_overlay_clips_at_far_edge() {
    let mut board = Board::new();
    let pattern: Pattern<ABILITY_SIZE> = Shape::Cross.pattern();
    overlay(&mut board, &pattern, 9, 9);
    // arms extend past row/col 9 and are skipped without error
    assert_eq!(board.count(Cell::Affected), 5);
    for (r, c) in [(9, 9), (9, 8), (9, 7), (8, 9), (7, 9)] {
        assert_eq!(board.get(r, c).unwrap(), Cell::Affected);
    }
}

#[test]
fn test_overlay_overwrites_ship_cells() {
    let mut board = Board::new();
    assert!(place_ship(&mut board, 6, 4, Orientation::Horizontal));
    let pattern: Pattern<ABILITY_SIZE> = Shape::Cross.pattern();
    overlay(&mut board, &pattern, 6, 6);
    // the whole ship sat on the cross's middle row
    assert_eq!(board.count(Cell::Ship), 0);
    for c in 4..7 {
        assert_eq!(board.get(6, c).unwrap(), Cell::Affected);
    }
}

#[test]
fn test_overlay_leaves_ships_outside_the_area() {
    let mut board = Board::new();
    assert!(place_ship(&mut board, 0, 0, Orientation::Horizontal));
    let pattern: Pattern<ABILITY_SIZE> = Shape::Diamond.pattern();
    overlay(&mut board, &pattern, 7, 7);
    assert_eq!(board.count(Cell::Ship), 3);
    assert_eq!(board.get(0, 0).unwrap(), Cell::Ship);
}
