//! Target selection seam between the turn engine and whatever chooses
//! shots (a person at a prompt, a bot, a test script).

use crate::common::ShotOutcome;
use crate::session::Session;
use rand::rngs::SmallRng;
use rand::Rng;

/// Supplies target coordinates and hears about resolved shots.
pub trait Gunner: Send {
    /// Choose the next target. The session exposes the guess board, so an
    /// implementation can avoid already-guessed cells; if it does not, the
    /// engine rejects the repeat and asks again without consuming a turn.
    fn select_target(&mut self, session: &Session) -> (u8, u8);

    /// Our shot at `coord` came back resolved.
    fn shot_resolved(&mut self, _coord: (u8, u8), _outcome: ShotOutcome) {}

    /// The opponent fired at `coord` on our board.
    fn incoming_shot(&mut self, _coord: (u8, u8), _outcome: ShotOutcome) {}
}

/// Fires uniformly at cells not yet guessed.
pub struct RandomGunner {
    rng: SmallRng,
}

impl RandomGunner {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }
}

impl Gunner for RandomGunner {
    fn select_target(&mut self, session: &Session) -> (u8, u8) {
        use crate::config::BOARD_SIZE;
        loop {
            let x = self.rng.random_range(0..BOARD_SIZE);
            let y = self.rng.random_range(0..BOARD_SIZE);
            if let Ok(cell) = session.guess_board().get(x, y) {
                if !cell.is_guessed() {
                    return (x, y);
                }
            }
        }
    }
}
