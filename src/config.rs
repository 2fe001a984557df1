pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet make-up in placement order. Slots 1 and 2 hold the two length-3
/// ships, told apart only by the order their sinkings are confirmed.
pub const FLEET: [u8; NUM_SHIPS] = [2, 3, 3, 4, 5];

/// Total occupied cells across the fleet (2+3+3+4+5).
pub const TOTAL_SHIP_CELLS: usize = 17;
