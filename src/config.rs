pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet composition, in placement order.
pub const FLEET_LENGTHS: [u8; NUM_SHIPS] = [2, 3, 4, 5, 3];

/// Total fleet cells; a side loses once this many of its cells are hit.
pub const TOTAL_SHIP_CELLS: u8 = 17;

/// Default TCP port for a hosted session.
pub const DEFAULT_PORT: u16 = 7891;
