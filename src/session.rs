//! The per-participant session: boards, hit counters and the turn state
//! machine. Pure state, no I/O; the node drives it from the wire.

use crate::board::Board;
use crate::cell::CellCode;
use crate::common::{BoardError, ShotError, ShotOutcome};
use crate::config::TOTAL_SHIP_CELLS;

/// Connection role. The initiator binds and listens; the responder dials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Initiator,
    Responder,
}

impl Role {
    /// Turn order is fixed by role: the initiator always fires first.
    /// (The original carried a disabled coin flip here; deterministic
    /// assignment needs no extra announcement message.)
    pub fn fires_first(self) -> bool {
        matches!(self, Role::Initiator)
    }
}

/// Turn engine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// It is our turn to pick a target.
    WaitingToFire,
    /// The opponent is picking a target.
    WaitingForOpponent,
    GameWon,
    GameLost,
    /// The peer quit or the stream failed.
    Disconnected,
}

impl TurnState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TurnState::GameWon | TurnState::GameLost | TurnState::Disconnected
        )
    }
}

/// One side's view of a running game. Owned by a single control flow and
/// handed to collaborators by reference; the strict turn alternation means
/// no concurrent mutation can occur.
#[derive(Debug)]
pub struct Session {
    own: Board,
    /// Checksum-verified snapshot of the opponent's fleet, received at
    /// transfer time. Only consulted for the terminal reveal.
    opponent: Board,
    /// Our record of fired shots; starts fully fogged.
    guesses: Board,
    shots_landed: u8,
    hits_taken: u8,
    state: TurnState,
}

impl Session {
    pub fn new(role: Role, own: Board, opponent: Board) -> Self {
        let state = if role.fires_first() {
            TurnState::WaitingToFire
        } else {
            TurnState::WaitingForOpponent
        };
        Self {
            own,
            opponent,
            guesses: Board::fog(),
            shots_landed: 0,
            hits_taken: 0,
            state,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn own_board(&self) -> &Board {
        &self.own
    }

    pub fn guess_board(&self) -> &Board {
        &self.guesses
    }

    /// Cells of our fleet the opponent has hit.
    pub fn hits_taken(&self) -> u8 {
        self.hits_taken
    }

    /// Cells of the opponent fleet we have hit.
    pub fn shots_landed(&self) -> u8 {
        self.shots_landed
    }

    /// Validate a target before anything is sent. A repeat of an earlier
    /// guess is rejected locally: no message goes out and no turn is
    /// consumed.
    pub fn fire(&self, x: u8, y: u8) -> Result<(), ShotError> {
        if self.state != TurnState::WaitingToFire {
            return Err(ShotError::GameOver);
        }
        let cell = self.guesses.get(x, y).map_err(|_| ShotError::OutOfBounds)?;
        if cell.is_guessed() {
            return Err(ShotError::AlreadyGuessed);
        }
        Ok(())
    }

    /// Record the defender's reply for the shot we just sent, then hand
    /// the turn over (or win).
    pub fn record_outcome(
        &mut self,
        x: u8,
        y: u8,
        outcome: ShotOutcome,
    ) -> Result<(), BoardError> {
        match outcome {
            ShotOutcome::Hit => {
                self.guesses.set(x, y, CellCode::HitGuess)?;
                self.shots_landed += 1;
                if self.shots_landed >= TOTAL_SHIP_CELLS {
                    self.state = TurnState::GameWon;
                    return Ok(());
                }
            }
            ShotOutcome::Miss => {
                self.guesses.set(x, y, CellCode::MissGuess)?;
            }
        }
        self.state = TurnState::WaitingForOpponent;
        Ok(())
    }

    /// Resolve an incoming shot against our own board, returning the
    /// outcome to report back. The win check runs before the turn is
    /// handed back: once we have lost, no further shot is processed.
    pub fn receive_shot(&mut self, x: u8, y: u8) -> Result<ShotOutcome, ShotError> {
        if self.state != TurnState::WaitingForOpponent {
            return Err(ShotError::GameOver);
        }
        let cell = self.own.get(x, y).map_err(|_| ShotError::OutOfBounds)?;
        let outcome = match cell {
            c if c.is_ship() => {
                self.own
                    .set(x, y, CellCode::HitOwn)
                    .map_err(|_| ShotError::OutOfBounds)?;
                self.hits_taken += 1;
                ShotOutcome::Hit
            }
            // a repeated incoming shot re-reports the recorded outcome
            // without double-counting
            CellCode::HitOwn => ShotOutcome::Hit,
            CellCode::MissOwn => ShotOutcome::Miss,
            _ => {
                self.own
                    .set(x, y, CellCode::MissOwn)
                    .map_err(|_| ShotError::OutOfBounds)?;
                ShotOutcome::Miss
            }
        };
        if self.hits_taken >= TOTAL_SHIP_CELLS {
            self.state = TurnState::GameLost;
        } else {
            self.state = TurnState::WaitingToFire;
        }
        Ok(outcome)
    }

    /// Enter the disconnected state (peer quit, stream failure, or a
    /// malformed message).
    pub fn disconnect(&mut self) {
        if !self.state.is_terminal() {
            self.state = TurnState::Disconnected;
        }
    }

    /// Fill the remaining fog on the guess board from the transferred
    /// snapshot, for the final display.
    pub fn reveal_opponent(&mut self) {
        let snapshot = self.opponent;
        self.guesses.reveal_from(&snapshot);
    }
}
