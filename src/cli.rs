#![cfg(feature = "std")]

//! Terminal front end: coordinate parsing, board rendering and a stdin
//! gunner. Stands in for the original graphical grid.

use std::io::{self, Write};
use std::string::String;

use crate::board::Board;
use crate::cell::CellCode;
use crate::common::ShotOutcome;
use crate::config::BOARD_SIZE;
use crate::gunner::Gunner;
use crate::session::Session;

pub fn coord_to_string(x: u8, y: u8) -> String {
    let col = (b'A' + x) as char;
    format!("{}{}", col, y + 1)
}

/// Parse "C4"-style input into (column, row).
pub fn parse_coord(input: &str) -> Option<(u8, u8)> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return None;
    }
    let x = (col_ch as u8) - b'A';
    let row_str: String = chars.collect();
    let row: u8 = row_str.parse().ok()?;
    if x >= BOARD_SIZE || row == 0 || row > BOARD_SIZE {
        return None;
    }
    Some((x, row - 1))
}

fn cell_char(cell: CellCode) -> char {
    match cell {
        CellCode::Water | CellCode::Fog => '.',
        CellCode::ShipA | CellCode::ShipB => 'S',
        CellCode::MissGuess | CellCode::MissOwn => 'o',
        CellCode::HitGuess | CellCode::HitOwn => 'X',
    }
}

pub fn print_board(board: &Board) {
    print!("   ");
    for x in 0..BOARD_SIZE {
        print!(" {}", (b'A' + x) as char);
    }
    println!();
    for y in 0..BOARD_SIZE {
        print!("{:2} ", y + 1);
        for x in 0..BOARD_SIZE {
            let cell = board.get(x, y).unwrap_or(CellCode::Water);
            print!(" {}", cell_char(cell));
        }
        println!();
    }
}

/// Opponent view on top, own board underneath.
pub fn print_session_view(session: &Session) {
    println!("Opponent board:");
    print_board(session.guess_board());
    println!("\nYour board:");
    print_board(session.own_board());
}

/// Prompt for each ship in turn, falling back to a random spot on empty
/// input. Rejected placements are re-prompted; the committed fleet is
/// always valid.
pub fn interactive_fleet<R: rand::Rng>(
    rng: &mut R,
) -> anyhow::Result<[crate::ship::Ship; crate::config::NUM_SHIPS]> {
    use crate::config::{FLEET_LENGTHS, NUM_SHIPS};
    use crate::ship::{random_spot, starting_fleet, try_move, Orientation, Ship};

    let mut ships = starting_fleet();
    let mut occupied = 0u128;
    println!("Place your ships (e.g. A5 H). Press enter for a random spot.");
    for i in 0..NUM_SHIPS {
        let len = FLEET_LENGTHS[i];
        loop {
            print!("Place ship of length {}: ", len);
            let _ = io::stdout().flush();
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            let line = line.trim();
            let candidate = if line.is_empty() {
                random_spot(rng, len, occupied).map_err(|e| anyhow::anyhow!(e))?
            } else {
                let mut parts = line.split_whitespace();
                let coord = parts.next().and_then(parse_coord);
                let orientation = match parts.next().map(str::to_ascii_uppercase) {
                    Some(ref s) if s.starts_with('V') => Orientation::Vertical,
                    _ => Orientation::Horizontal,
                };
                match coord {
                    Some((x, y)) => Ship::new(x, y, len, orientation),
                    None => {
                        println!("Invalid input");
                        continue;
                    }
                }
            };
            match try_move(candidate, occupied) {
                Ok(ship) => {
                    occupied |= ship.mask().map_err(|e| anyhow::anyhow!(e))?;
                    ships[i] = ship;
                    break;
                }
                Err(e) => println!("Error: {}", e),
            }
        }
    }
    Ok(ships)
}

/// Prompts on stdin for each shot.
pub struct CliGunner;

impl CliGunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliGunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Gunner for CliGunner {
    fn select_target(&mut self, session: &Session) -> (u8, u8) {
        print_session_view(session);
        loop {
            print!("Enter target (e.g. C4): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                continue;
            }
            match parse_coord(&line) {
                Some((x, y)) => return (x, y),
                None => println!("Invalid coordinate"),
            }
        }
    }

    fn shot_resolved(&mut self, coord: (u8, u8), outcome: ShotOutcome) {
        println!(
            "You fired at {} -> {:?}",
            coord_to_string(coord.0, coord.1),
            outcome
        );
    }

    fn incoming_shot(&mut self, coord: (u8, u8), outcome: ShotOutcome) {
        println!(
            "Opponent fired at {} -> {:?}",
            coord_to_string(coord.0, coord.1),
            outcome
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_parsing() {
        assert_eq!(parse_coord("A1"), Some((0, 0)));
        assert_eq!(parse_coord("j10"), Some((9, 9)));
        assert_eq!(parse_coord("K1"), None);
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("A11"), None);
        assert_eq!(parse_coord(""), None);
        // non-ASCII letters must not truncate into the A-J range
        assert_eq!(parse_coord("Ł5"), None);
        assert_eq!(parse_coord("15"), None);
    }
}
