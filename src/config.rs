use crate::ship::ShipType;

pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 26;
pub const NUM_SHIPS: usize = 4;

/// Standard fleet in placement order, largest first.
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("aircraft carrier", 5),
    ShipType::new("missile boat", 3),
    ShipType::new("submarine", 3),
    ShipType::new("destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

const fn fleet_cells(fleet: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

/// Random placement attempts per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Input token that ends the game early.
pub const EXIT_TOKEN: &str = "exit";

