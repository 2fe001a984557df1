use broadside::{
    skewed_layout, uniform_layout, Layout, Orientation, BOARD_SIZE, EMPTY_CELL, FLEET,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn check_layout_invariants(layout: &Layout) {
    // exactly 17 occupied cells, each carrying its ship's length
    let occupied: usize = layout
        .grid()
        .iter()
        .flatten()
        .filter(|&&c| c != EMPTY_CELL)
        .count();
    assert_eq!(occupied, TOTAL_SHIP_CELLS);

    // ships match the fleet definition, in order
    let lengths: Vec<u8> = layout.ships().iter().map(|s| s.length).collect();
    assert_eq!(lengths, FLEET.to_vec());

    // every ship in bounds, contiguous along its orientation, and backed by
    // grid cells holding its length
    let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
    for ship in layout.ships() {
        for k in 0..ship.length as usize {
            let (x, y) = match ship.orientation {
                Orientation::Horizontal => (ship.x as usize + k, ship.y as usize),
                Orientation::Vertical => (ship.x as usize, ship.y as usize + k),
            };
            assert!(x < BOARD_SIZE && y < BOARD_SIZE, "ship out of bounds");
            assert!(!seen[x][y], "ships overlap at ({}, {})", x, y);
            seen[x][y] = true;
            assert_eq!(layout.grid()[x][y], ship.length);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn skewed_layouts_are_valid(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = skewed_layout(&mut rng).unwrap();
        check_layout_invariants(&layout);
    }

    #[test]
    fn uniform_layouts_are_valid(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = uniform_layout(&mut rng).unwrap();
        check_layout_invariants(&layout);
    }
}
