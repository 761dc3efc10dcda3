use super::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet in mandated placement order.
pub const SHIPS: [ShipKind; NUM_SHIPS] = [
    ShipKind::new("Aircraft Carrier", 5),
    ShipKind::new("Battleship", 4),
    ShipKind::new("Submarine", 3),
    ShipKind::new("Cruiser", 3),
    ShipKind::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = total_ship_cells();

/// Candidate positions tried per ship before random placement gives up.
pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 1000;

const fn total_ship_cells() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < NUM_SHIPS {
        total += SHIPS[i].length();
        i += 1;
    }
    total
}
