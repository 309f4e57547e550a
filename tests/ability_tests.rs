use batalha_naval::{Pattern, Shape, ABILITY_SIZE};

#[test]
fn test_cone_widens_downward() {
    let pattern: Pattern<ABILITY_SIZE> = Shape::Cone.pattern();
    // row 0: single cell at the center column
    for j in 0..ABILITY_SIZE {
        assert_eq!(pattern.affects(0, j), j == ABILITY_SIZE / 2);
    }
    // row center*2: full width
    for j in 0..ABILITY_SIZE {
        assert!(pattern.affects(ABILITY_SIZE - 1, j));
    }
    // each row widens by one cell on each side
    assert!(pattern.affects(1, 1));
    assert!(pattern.affects(1, 3));
    assert!(!pattern.affects(1, 0));
    assert!(!pattern.affects(1, 4));
}

#[test]
fn test_cross_has_nine_affected_cells() {
    let pattern: Pattern<ABILITY_SIZE> = Shape::Cross.pattern();
    assert_eq!(pattern.count(), 9);
    let center = ABILITY_SIZE / 2;
    for k in 0..ABILITY_SIZE {
        assert!(pattern.affects(center, k));
        assert!(pattern.affects(k, center));
    }
    assert!(!pattern.affects(0, 0));
    assert!(!pattern.affects(4, 4));
}

#[test]
fn test_diamond_is_bounded_by_manhattan_distance() {
    let pattern: Pattern<ABILITY_SIZE> = Shape::Diamond.pattern();
    // 1 + 3 + 5 + 3 + 1
    assert_eq!(pattern.count(), 13);
    let center = ABILITY_SIZE / 2;
    assert!(pattern.affects(center, center));
    for (i, j) in [(0, center), (center, 0), (ABILITY_SIZE - 1, center), (center, ABILITY_SIZE - 1)] {
        assert!(pattern.affects(i, j));
    }
    for (i, j) in [(0, 0), (0, 4), (4, 0), (4, 4)] {
        assert!(!pattern.affects(i, j));
    }
}

#[test]
fn test_from_predicate_and_out_of_range_queries() {
    let diag = Pattern::<ABILITY_SIZE>::from_predicate(|i, j| i == j);
    assert_eq!(diag.count(), ABILITY_SIZE);
    assert!(diag.affects(3, 3));
    assert!(!diag.affects(3, 2));
    // queries past the matrix are unaffected, not a panic
    assert!(!diag.affects(ABILITY_SIZE, 0));
    assert!(!diag.affects(0, ABILITY_SIZE));
}

#[test]
fn test_patterns_are_deterministic() {
    for shape in [Shape::Cone, Shape::Cross, Shape::Diamond] {
        let a: Pattern<ABILITY_SIZE> = shape.pattern();
        let b: Pattern<ABILITY_SIZE> = shape.pattern();
        assert_eq!(a, b);
    }
}
