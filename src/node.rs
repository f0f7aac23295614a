#![cfg(feature = "std")]

//! Drives one participant's session over a transport: link confirmation,
//! placement sync, checksum-verified board exchange, then the strictly
//! alternating turn loop until a terminal state.

use crate::board::Board;
use crate::common::{ProtocolError, ShotError};
use crate::gunner::Gunner;
use crate::protocol::{
    self, TOKEN_LINK_READY, TOKEN_PLACEMENT_DONE, TOKEN_TURN_READY,
};
use crate::session::{Role, Session, TurnState};
use crate::transport::Transport;

pub struct SessionNode {
    gunner: Box<dyn Gunner>,
    transport: Box<dyn Transport>,
}

impl SessionNode {
    pub fn new(gunner: Box<dyn Gunner>, transport: Box<dyn Transport>) -> Self {
        Self { gunner, transport }
    }

    /// Confirm the link right after connecting, before placement starts.
    pub async fn link_ready(&mut self) -> anyhow::Result<()> {
        protocol::exchange_token(&mut *self.transport, TOKEN_LINK_READY).await
    }

    /// Run the full session: placement sync, board transfer, turn loop,
    /// teardown. `own` is the validated fleet board. Returns the finished
    /// session (terminal state, revealed boards) for display.
    ///
    /// Failures before the turn phase (unreachable peer, checksum
    /// mismatch) are fatal errors; once the game is running, any stream or
    /// protocol failure is treated as the opponent quitting. The transport
    /// is released on every path, fatal ones included.
    pub async fn play(&mut self, role: Role, own: Board) -> anyhow::Result<Session> {
        match self.play_inner(role, own).await {
            Ok(session) => Ok(session),
            Err(e) => {
                protocol::send_quit(&mut *self.transport).await;
                let _ = self.transport.close().await;
                Err(e)
            }
        }
    }

    async fn play_inner(&mut self, role: Role, own: Board) -> anyhow::Result<Session> {
        // both placements done
        protocol::exchange_token(&mut *self.transport, TOKEN_PLACEMENT_DONE).await?;
        log::info!("placement synced, transferring boards");

        protocol::send_board(&mut *self.transport, &own).await?;
        let opponent = protocol::recv_board(&mut *self.transport).await?;
        log::info!(
            "board transfer verified (checksum {})",
            opponent.checksum()
        );

        protocol::exchange_token(&mut *self.transport, TOKEN_TURN_READY).await?;
        log::info!("turn phase started as {:?}", role);

        let mut session = Session::new(role, own, opponent);
        self.turn_loop(&mut session).await;

        // teardown: announce the quit unless the peer already vanished,
        // then release the stream. close() is idempotent.
        if session.state() != TurnState::Disconnected {
            protocol::send_quit(&mut *self.transport).await;
        }
        let _ = self.transport.close().await;
        session.reveal_opponent();
        log::info!("session finished: {:?}", session.state());
        Ok(session)
    }

    /// Convenience wrapper: link confirmation followed by the session.
    pub async fn run(&mut self, role: Role, own: Board) -> anyhow::Result<Session> {
        self.link_ready().await?;
        self.play(role, own).await
    }

    async fn turn_loop(&mut self, session: &mut Session) {
        loop {
            match session.state() {
                TurnState::WaitingToFire => {
                    if !self.take_turn(session).await {
                        break;
                    }
                }
                TurnState::WaitingForOpponent => {
                    if !self.await_turn(session).await {
                        break;
                    }
                }
                _ => break,
            }
        }
    }

    /// One firing turn. Returns false once the session cannot continue.
    async fn take_turn(&mut self, session: &mut Session) -> bool {
        let (x, y) = loop {
            let (x, y) = self.gunner.select_target(session);
            match session.fire(x, y) {
                Ok(()) => break (x, y),
                // a repeat or stray target costs nothing: nothing is
                // sent, the turn is not consumed, ask again
                Err(ShotError::AlreadyGuessed) | Err(ShotError::OutOfBounds) => {
                    log::debug!("rejected target ({}, {}), asking again", x, y);
                }
                Err(ShotError::GameOver) => return false,
            }
        };
        if let Err(e) = protocol::send_shot(&mut *self.transport, x, y).await {
            self.drop_session(session, e);
            return false;
        }
        match protocol::recv_outcome(&mut *self.transport).await {
            Ok(outcome) => {
                // coordinates came from fire(), in bounds by construction
                if session.record_outcome(x, y, outcome).is_err() {
                    return false;
                }
                self.gunner.shot_resolved((x, y), outcome);
                true
            }
            Err(e) => {
                self.drop_session(session, e);
                false
            }
        }
    }

    /// One defending turn. Returns false once the session cannot continue.
    async fn await_turn(&mut self, session: &mut Session) -> bool {
        match protocol::recv_shot(&mut *self.transport).await {
            Ok((x, y)) => {
                let outcome = match session.receive_shot(x, y) {
                    Ok(outcome) => outcome,
                    Err(_) => return false,
                };
                self.gunner.incoming_shot((x, y), outcome);
                if let Err(e) = protocol::send_outcome(&mut *self.transport, outcome).await
                {
                    self.drop_session(session, e);
                    return false;
                }
                true
            }
            Err(e) => {
                self.drop_session(session, e);
                false
            }
        }
    }

    /// A read, write or parse failure mid-game counts as the opponent
    /// quitting: end the session gracefully.
    fn drop_session(&mut self, session: &mut Session, err: anyhow::Error) {
        match err.downcast_ref::<ProtocolError>() {
            Some(ProtocolError::PeerQuit) => log::info!("peer quit the session"),
            Some(_) => log::warn!("protocol violation, ending session: {}", err),
            None => log::warn!("transport failure, ending session: {}", err),
        }
        session.disconnect();
    }
}
