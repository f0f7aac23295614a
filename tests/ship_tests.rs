use broadside::{
    fleet_mask, place_fleet, random_fleet, starting_fleet, try_move, CellCode,
    Orientation, PlacementError, Ship, FLEET_LENGTHS, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn fleet_composition_totals_seventeen() {
    let total: u8 = FLEET_LENGTHS.iter().sum();
    assert_eq!(total, TOTAL_SHIP_CELLS);
    assert_eq!(FLEET_LENGTHS.len(), NUM_SHIPS);
}

#[test]
fn default_fleet_places_cleanly() {
    let board = place_fleet(&starting_fleet()).unwrap();
    assert_eq!(board.occupied_mask().count_ones(), 17);
}

#[test]
fn overlapping_fleet_is_rejected() {
    let mut ships = starting_fleet();
    // drop ship 1 onto ship 0's row
    ships[1] = ships[1].at(0, 0);
    assert_eq!(place_fleet(&ships).unwrap_err(), PlacementError::Overlap);
}

#[test]
fn overhanging_fleet_is_rejected() {
    let mut ships = starting_fleet();
    ships[3] = Ship::new(7, 0, 5, Orientation::Horizontal);
    assert_eq!(place_fleet(&ships).unwrap_err(), PlacementError::OutOfBounds);
}

#[test]
fn adjacent_ships_are_legal() {
    // two ships touching side by side, no shared cell
    let ships = [
        Ship::new(0, 0, 2, Orientation::Horizontal),
        Ship::new(0, 1, 3, Orientation::Horizontal),
        Ship::new(0, 2, 4, Orientation::Horizontal),
        Ship::new(0, 3, 5, Orientation::Horizontal),
        Ship::new(0, 4, 3, Orientation::Horizontal),
    ];
    let board = place_fleet(&ships).unwrap();
    assert_eq!(board.occupied_mask().count_ones(), 17);
}

#[test]
fn ship_markers_alternate_but_both_occupy() {
    let board = place_fleet(&starting_fleet()).unwrap();
    assert_eq!(board.get(0, 0).unwrap(), CellCode::ShipA);
    assert_eq!(board.get(0, 2).unwrap(), CellCode::ShipB);
    assert!(board.get(0, 0).unwrap().is_ship());
    assert!(board.get(0, 2).unwrap().is_ship());
}

#[test]
fn try_move_rejects_collision_and_keeps_prior() {
    let ships = starting_fleet();
    let others = fleet_mask(&ships, 1).unwrap();
    let prior = ships[1];
    // moving ship 1 onto ship 0 must fail
    let err = try_move(prior.at(0, 0), others).unwrap_err();
    assert_eq!(err, PlacementError::Overlap);
    // the caller keeps the prior ship; the fleet still places
    assert!(place_fleet(&ships).is_ok());
}

#[test]
fn try_move_rejects_rotation_off_board() {
    let ship = Ship::new(0, 8, 5, Orientation::Horizontal);
    let err = try_move(ship.rotated(), 0).unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds);
}

#[test]
fn accepted_moves_keep_fleet_placeable() {
    let mut ships = starting_fleet();
    let moves: [(usize, u8, u8); 4] = [(0, 5, 5), (2, 6, 0), (4, 0, 9), (1, 3, 3)];
    for (i, x, y) in moves {
        let others = fleet_mask(&ships, i).unwrap();
        if let Ok(moved) = try_move(ships[i].at(x, y), others) {
            ships[i] = moved;
        }
    }
    assert!(place_fleet(&ships).is_ok());
}

#[test]
fn random_fleet_is_always_valid() {
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let ships = random_fleet(&mut rng).unwrap();
        let board = place_fleet(&ships).unwrap();
        assert_eq!(board.occupied_mask().count_ones(), 17, "seed {}", seed);
    }
}
