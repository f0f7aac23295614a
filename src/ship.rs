//! Ship geometry, fleet placement and the collision check.

use crate::board::Board;
use crate::cell::CellCode;
use crate::common::PlacementError;
use crate::config::{BOARD_SIZE, FLEET_LENGTHS, NUM_SHIPS};
use rand::Rng;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A ship anchored at (`x`, `y`), occupying `length` consecutive cells
/// along its orientation axis. Rotation keeps the anchor fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    pub x: u8,
    pub y: u8,
    pub length: u8,
    pub orientation: Orientation,
}

impl Ship {
    pub fn new(x: u8, y: u8, length: u8, orientation: Orientation) -> Self {
        Self {
            x,
            y,
            length,
            orientation,
        }
    }

    /// Occupied-cell bitmask (bit `y * 10 + x`), or `OutOfBounds` if any
    /// segment leaves the board.
    pub fn mask(&self) -> Result<u128, PlacementError> {
        let mut mask = 0u128;
        for i in 0..self.length as u16 {
            let (cx, cy) = match self.orientation {
                Orientation::Horizontal => (self.x as u16 + i, self.y as u16),
                Orientation::Vertical => (self.x as u16, self.y as u16 + i),
            };
            if cx >= BOARD_SIZE as u16 || cy >= BOARD_SIZE as u16 {
                return Err(PlacementError::OutOfBounds);
            }
            mask |= 1u128 << (cy * BOARD_SIZE as u16 + cx);
        }
        Ok(mask)
    }

    /// This ship moved to a new anchor.
    pub fn at(&self, x: u8, y: u8) -> Self {
        Self { x, y, ..*self }
    }

    /// This ship rotated in place.
    pub fn rotated(&self) -> Self {
        Self {
            orientation: self.orientation.flipped(),
            ..*self
        }
    }
}

/// Combined occupancy mask of `ships`, skipping index `excluding` (pass
/// `NUM_SHIPS` or more to include all). Ships that are individually out of
/// bounds are impossible here; the fleet is only ever mutated through
/// [`try_move`].
pub fn fleet_mask(ships: &[Ship], excluding: usize) -> Result<u128, PlacementError> {
    let mut mask = 0u128;
    for (i, ship) in ships.iter().enumerate() {
        if i == excluding {
            continue;
        }
        mask |= ship.mask()?;
    }
    Ok(mask)
}

/// Validate a proposed move or rotation. The candidate is tested against
/// board bounds and `others_mask` (the rest of the fleet); on rejection the
/// caller keeps the prior ship, so no invalid state is ever observable.
pub fn try_move(
    candidate: Ship,
    others_mask: u128,
) -> Result<Ship, PlacementError> {
    let mask = candidate.mask()?;
    if mask & others_mask != 0 {
        return Err(PlacementError::Overlap);
    }
    Ok(candidate)
}

/// Build the occupancy board for a validated fleet. Ships alternate
/// `ShipA`/`ShipB` markers by index so a renderer can tell neighbours
/// apart; both codes count equally for occupancy.
pub fn place_fleet(ships: &[Ship; NUM_SHIPS]) -> Result<Board, PlacementError> {
    let mut board = Board::new();
    let mut occupied = 0u128;
    for (i, ship) in ships.iter().enumerate() {
        let mask = ship.mask()?;
        if mask & occupied != 0 {
            return Err(PlacementError::Overlap);
        }
        occupied |= mask;
        let code = if i % 2 == 0 {
            CellCode::ShipA
        } else {
            CellCode::ShipB
        };
        for step in 0..ship.length {
            let (cx, cy) = match ship.orientation {
                Orientation::Horizontal => (ship.x + step, ship.y),
                Orientation::Vertical => (ship.x, ship.y + step),
            };
            // mask() already proved these in bounds
            let _ = board.set(cx, cy, code);
        }
    }
    Ok(board)
}

/// The fixed starting arrangement offered before interactive placement:
/// one ship per other row down the left edge, all horizontal.
pub fn starting_fleet() -> [Ship; NUM_SHIPS] {
    core::array::from_fn(|i| {
        Ship::new(0, (i as u8) * 2, FLEET_LENGTHS[i], Orientation::Horizontal)
    })
}

/// Pick a random non-colliding spot for a ship of length `len`, given the
/// mask of already-occupied cells. Attempts are bounded; with 17 fleet
/// cells on a 100-cell board this does not fail in practice, but the
/// error is surfaced rather than looping forever.
pub fn random_spot<R: Rng>(
    rng: &mut R,
    len: u8,
    occupied: u128,
) -> Result<Ship, PlacementError> {
    for _ in 0..100 {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_x, max_y) = match orientation {
            Orientation::Horizontal => (BOARD_SIZE - len, BOARD_SIZE - 1),
            Orientation::Vertical => (BOARD_SIZE - 1, BOARD_SIZE - len),
        };
        let candidate = Ship::new(
            rng.random_range(0..=max_x),
            rng.random_range(0..=max_y),
            len,
            orientation,
        );
        if let Ok(ship) = try_move(candidate, occupied) {
            return Ok(ship);
        }
    }
    Err(PlacementError::Overlap)
}

/// Randomly scatter the whole fleet without overlap.
pub fn random_fleet<R: Rng>(rng: &mut R) -> Result<[Ship; NUM_SHIPS], PlacementError> {
    let mut ships = starting_fleet();
    let mut occupied = 0u128;
    for i in 0..NUM_SHIPS {
        let ship = random_spot(rng, FLEET_LENGTHS[i], occupied)?;
        occupied |= ship.mask()?;
        ships[i] = ship;
    }
    Ok(ships)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_counts_length_cells() {
        let ship = Ship::new(2, 3, 4, Orientation::Horizontal);
        assert_eq!(ship.mask().unwrap().count_ones(), 4);
    }

    #[test]
    fn mask_rejects_overhang() {
        let ship = Ship::new(8, 0, 4, Orientation::Horizontal);
        assert_eq!(ship.mask().unwrap_err(), PlacementError::OutOfBounds);
        let ship = Ship::new(0, 7, 5, Orientation::Vertical);
        assert_eq!(ship.mask().unwrap_err(), PlacementError::OutOfBounds);
    }

    #[test]
    fn rotation_keeps_anchor() {
        let ship = Ship::new(4, 4, 3, Orientation::Horizontal).rotated();
        assert_eq!((ship.x, ship.y), (4, 4));
        assert_eq!(ship.orientation, Orientation::Vertical);
    }
}
