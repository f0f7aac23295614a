//! Cell codes shared by both boards and the wire format.

use core::fmt;

/// State of a single board cell. The discriminants are the codes sent
/// during board transfer and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CellCode {
    /// Open water, no ship segment.
    Water = 0,
    /// Ship segment, first marker class.
    ShipA = 1,
    /// Ship segment, second marker class.
    ShipB = 2,
    /// Unknown opponent territory.
    Fog = 3,
    /// A shot we fired that missed.
    MissGuess = 4,
    /// A shot we fired that hit.
    HitGuess = 5,
    /// An incoming shot that missed our fleet.
    MissOwn = 6,
    /// An incoming shot that hit our fleet.
    HitOwn = 7,
}

impl CellCode {
    /// Whether this cell holds a ship segment. `ShipA` and `ShipB` are
    /// occupancy-equivalent; the split exists only so a renderer can tell
    /// alternating ships apart.
    pub fn is_ship(self) -> bool {
        matches!(self, CellCode::ShipA | CellCode::ShipB)
    }

    /// Whether this cell on a guess board has already been fired at.
    pub fn is_guessed(self) -> bool {
        matches!(self, CellCode::MissGuess | CellCode::HitGuess)
    }

    /// Numeric wire code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a wire code. Codes above 7 are invalid.
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => CellCode::Water,
            1 => CellCode::ShipA,
            2 => CellCode::ShipB,
            3 => CellCode::Fog,
            4 => CellCode::MissGuess,
            5 => CellCode::HitGuess,
            6 => CellCode::MissOwn,
            7 => CellCode::HitOwn,
            _ => return None,
        })
    }
}

impl fmt::Display for CellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
