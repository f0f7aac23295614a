//! The 10x10 game board and its wire serialization.

use crate::cell::CellCode;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use core::fmt;

const N: usize = BOARD_SIZE as usize;

/// A 10x10 grid of cell codes. `x` is the column, `y` the row; storage and
/// serialization are row-major.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[CellCode; N]; N],
}

impl Board {
    /// An own board: every cell starts as water.
    pub fn new() -> Self {
        Self {
            cells: [[CellCode::Water; N]; N],
        }
    }

    /// An opponent-view board: every cell starts fogged.
    pub fn fog() -> Self {
        Self {
            cells: [[CellCode::Fog; N]; N],
        }
    }

    fn check(x: u8, y: u8) -> Result<(), BoardError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds);
        }
        Ok(())
    }

    pub fn get(&self, x: u8, y: u8) -> Result<CellCode, BoardError> {
        Self::check(x, y)?;
        Ok(self.cells[y as usize][x as usize])
    }

    pub fn set(&mut self, x: u8, y: u8, code: CellCode) -> Result<(), BoardError> {
        Self::check(x, y)?;
        self.cells[y as usize][x as usize] = code;
        Ok(())
    }

    /// Sum of all 100 cell codes, row-major. Verifies a transferred board
    /// arrived intact.
    pub fn checksum(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .map(|c| c.code() as u32)
            .sum()
    }

    /// Row-major iteration of the 100 cell codes, in wire order.
    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().flatten().map(|c| c.code())
    }

    /// Rebuild a board from exactly 100 row-major wire codes. `None` if a
    /// code is invalid or the count is wrong.
    pub fn from_codes<I: IntoIterator<Item = u8>>(codes: I) -> Option<Self> {
        let mut board = Board::new();
        let mut n = 0usize;
        for code in codes {
            if n >= N * N {
                return None;
            }
            board.cells[n / N][n % N] = CellCode::from_code(code)?;
            n += 1;
        }
        if n != N * N {
            return None;
        }
        Some(board)
    }

    /// Bitmask of ship-occupied cells, bit `y * 10 + x`. Used by the
    /// placement collision check.
    pub fn occupied_mask(&self) -> u128 {
        let mut mask = 0u128;
        for y in 0..N {
            for x in 0..N {
                if self.cells[y][x].is_ship() {
                    mask |= 1u128 << (y * N + x);
                }
            }
        }
        mask
    }

    /// Count of cells currently holding `code`.
    pub fn count(&self, code: CellCode) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == code).count()
    }

    /// Copy `other` into every cell of this board that is still fogged.
    /// Used to reveal the opponent's true fleet at game end.
    pub fn reveal_from(&mut self, other: &Board) {
        for y in 0..N {
            for x in 0..N {
                if self.cells[y][x] == CellCode::Fog {
                    self.cells[y][x] = other.cells[y][x];
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in &self.cells {
            write!(f, "  ")?;
            for c in row {
                write!(f, "{} ", c.code())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_boards() {
        let own = Board::new();
        assert_eq!(own.checksum(), 0);
        let fog = Board::fog();
        assert_eq!(fog.get(0, 0).unwrap(), CellCode::Fog);
        // 100 cells of Fog (=3)
        assert_eq!(fog.checksum(), 300);
    }

    #[test]
    fn bounds_are_enforced() {
        let mut b = Board::new();
        assert_eq!(b.get(10, 0).unwrap_err(), BoardError::OutOfBounds);
        assert_eq!(b.set(0, 10, CellCode::ShipA).unwrap_err(), BoardError::OutOfBounds);
        assert!(b.set(9, 9, CellCode::ShipA).is_ok());
    }

    #[test]
    fn wire_order_is_row_major() {
        let mut b = Board::new();
        b.set(3, 0, CellCode::ShipA).unwrap();
        b.set(0, 1, CellCode::ShipB).unwrap();
        let codes: std::vec::Vec<u8> = b.codes().collect();
        assert_eq!(codes[3], 1);
        assert_eq!(codes[10], 2);
        assert_eq!(codes.len(), 100);
    }

    #[test]
    fn from_codes_rejects_bad_input() {
        assert!(Board::from_codes([0u8; 99]).is_none());
        assert!(Board::from_codes([0u8; 101]).is_none());
        let mut codes = [0u8; 100];
        codes[50] = 9;
        assert!(Board::from_codes(codes).is_none());
    }
}
