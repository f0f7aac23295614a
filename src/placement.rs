//! Interactive fleet placement.
//!
//! The placement session owns the fleet while the user shuffles ships
//! around. Every move or rotation is applied provisionally, tested for
//! bounds and collisions, and rolled back if invalid, so the fleet the
//! session exposes is valid at all times. An input collaborator (UI,
//! test driver) feeds [`PlacementCommand`]s through a channel; nothing
//! progresses until a command arrives.

use crate::board::Board;
use crate::common::PlacementError;
use crate::config::NUM_SHIPS;
use crate::ship::{fleet_mask, place_fleet, starting_fleet, try_move, Ship};

/// One step of movement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Commands accepted during placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementCommand {
    /// Select the ship at the given fleet index.
    Select(usize),
    /// Nudge the selected ship one cell.
    Move(Direction),
    /// Rotate the selected ship around its anchor.
    Rotate,
    /// Finish placement with the current arrangement.
    Commit,
}

/// Holds the fleet during interactive placement.
pub struct PlacementSession {
    ships: [Ship; NUM_SHIPS],
    selected: usize,
}

impl PlacementSession {
    /// Start from the fixed default arrangement.
    pub fn new() -> Self {
        Self {
            ships: starting_fleet(),
            selected: 0,
        }
    }

    pub fn ships(&self) -> &[Ship; NUM_SHIPS] {
        &self.ships
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Apply one command. Returns the finished occupancy board on
    /// `Commit`. Rejected moves leave the fleet exactly as it was.
    pub fn apply(
        &mut self,
        cmd: PlacementCommand,
    ) -> Result<Option<Board>, PlacementError> {
        match cmd {
            PlacementCommand::Select(i) => {
                if i < NUM_SHIPS {
                    self.selected = i;
                }
                Ok(None)
            }
            PlacementCommand::Move(dir) => {
                let ship = self.ships[self.selected];
                let (x, y) = match dir {
                    Direction::Up => (Some(ship.x), ship.y.checked_sub(1)),
                    Direction::Down => (Some(ship.x), ship.y.checked_add(1)),
                    Direction::Left => (ship.x.checked_sub(1), Some(ship.y)),
                    Direction::Right => (ship.x.checked_add(1), Some(ship.y)),
                };
                let (x, y) = match (x, y) {
                    (Some(x), Some(y)) => (x, y),
                    _ => return Err(PlacementError::OutOfBounds),
                };
                self.commit_move(ship.at(x, y))?;
                Ok(None)
            }
            PlacementCommand::Rotate => {
                let ship = self.ships[self.selected];
                self.commit_move(ship.rotated())?;
                Ok(None)
            }
            PlacementCommand::Commit => {
                let board = place_fleet(&self.ships)?;
                Ok(Some(board))
            }
        }
    }

    fn commit_move(&mut self, candidate: Ship) -> Result<(), PlacementError> {
        let others = fleet_mask(&self.ships, self.selected)?;
        let ship = try_move(candidate, others)?;
        self.ships[self.selected] = ship;
        Ok(())
    }
}

impl Default for PlacementSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive a placement session from a command channel until the fleet is
/// committed. Invalid moves are logged and dropped (the original plays an
/// error sound here); the session blocks on the channel, so no turn
/// progresses until a local action arrives.
#[cfg(feature = "std")]
pub async fn run_placement(
    mut commands: tokio::sync::mpsc::Receiver<PlacementCommand>,
) -> anyhow::Result<([Ship; NUM_SHIPS], Board)> {
    let mut session = PlacementSession::new();
    while let Some(cmd) = commands.recv().await {
        match session.apply(cmd) {
            Ok(Some(board)) => return Ok((*session.ships(), board)),
            Ok(None) => {}
            Err(e) => log::debug!("placement command rejected: {}", e),
        }
    }
    Err(anyhow::anyhow!("placement input closed before commit"))
}
