//! Wire protocol: newline-delimited ASCII tokens.
//!
//! Phase tokens are single short lines; a board transfer is 100 cell-code
//! lines in row-major order followed by a checksum line; a shot is the
//! target column then the target row on consecutive lines, answered by a
//! single outcome line carrying the cell code the defender recorded. The
//! termination sentinel may arrive in place of any expected line.

use crate::board::Board;
use crate::cell::CellCode;
use crate::common::{ProtocolError, ShotOutcome};
use crate::config::BOARD_SIZE;

/// Link confirmation, sent by both sides right after connecting.
pub const TOKEN_LINK_READY: &str = "A";
/// Own ship placement finished.
pub const TOKEN_PLACEMENT_DONE: &str = "sd";
/// Ready to enter the turn phase.
pub const TOKEN_TURN_READY: &str = "H";
/// Termination sentinel, sent twice on teardown.
pub const TOKEN_QUIT: &str = "E";

fn quit_check(line: &str) -> Result<&str, ProtocolError> {
    let line = line.trim();
    if line == TOKEN_QUIT {
        return Err(ProtocolError::PeerQuit);
    }
    Ok(line)
}

/// Expect a specific phase token. Anything else is a protocol violation,
/// handled like a quit.
pub fn expect_token(line: &str, token: &str) -> Result<(), ProtocolError> {
    if quit_check(line)? == token {
        Ok(())
    } else {
        Err(ProtocolError::Malformed)
    }
}

/// Parse one coordinate line (decimal, 0-9).
pub fn parse_coord(line: &str) -> Result<u8, ProtocolError> {
    let value: u8 = quit_check(line)?
        .parse()
        .map_err(|_| ProtocolError::Malformed)?;
    if value >= BOARD_SIZE {
        return Err(ProtocolError::Malformed);
    }
    Ok(value)
}

/// Parse one board-transfer cell code line.
pub fn parse_code(line: &str) -> Result<u8, ProtocolError> {
    let value: u8 = quit_check(line)?
        .parse()
        .map_err(|_| ProtocolError::Malformed)?;
    if CellCode::from_code(value).is_none() {
        return Err(ProtocolError::Malformed);
    }
    Ok(value)
}

/// Parse a declared checksum line.
pub fn parse_checksum(line: &str) -> Result<u32, ProtocolError> {
    quit_check(line)?.parse().map_err(|_| ProtocolError::Malformed)
}

/// Parse the defender's outcome reply: the cell code it recorded.
pub fn parse_outcome(line: &str) -> Result<ShotOutcome, ProtocolError> {
    match quit_check(line)? {
        "7" => Ok(ShotOutcome::Hit),
        "6" => Ok(ShotOutcome::Miss),
        _ => Err(ProtocolError::Malformed),
    }
}

/// Wire encoding of an outcome reply.
pub fn outcome_code(outcome: ShotOutcome) -> CellCode {
    match outcome {
        ShotOutcome::Hit => CellCode::HitOwn,
        ShotOutcome::Miss => CellCode::MissOwn,
    }
}

#[cfg(feature = "std")]
pub use wire::*;

#[cfg(feature = "std")]
mod wire {
    use super::*;
    use crate::transport::Transport;
    use std::format;
    use std::string::ToString;

    /// Send our phase token and consume the peer's.
    pub async fn exchange_token(
        transport: &mut dyn Transport,
        token: &str,
    ) -> anyhow::Result<()> {
        transport.send_line(token).await?;
        let line = transport.recv_line().await?;
        expect_token(&line, token)?;
        Ok(())
    }

    /// Send a board as 100 cell-code lines plus the checksum line.
    pub async fn send_board(
        transport: &mut dyn Transport,
        board: &Board,
    ) -> anyhow::Result<()> {
        let mut checksum: u32 = 0;
        for code in board.codes() {
            checksum += code as u32;
            transport.send_line(&code.to_string()).await?;
        }
        transport.send_line(&checksum.to_string()).await?;
        Ok(())
    }

    /// Receive a board and verify its declared checksum. A mismatch is
    /// fatal: the session must not be played on silently corrupted data.
    pub async fn recv_board(transport: &mut dyn Transport) -> anyhow::Result<Board> {
        let mut codes = [0u8; 100];
        for slot in codes.iter_mut() {
            let line = transport.recv_line().await?;
            *slot = parse_code(&line)?;
        }
        let board = Board::from_codes(codes).ok_or(ProtocolError::Malformed)?;
        let line = transport.recv_line().await?;
        let declared = parse_checksum(&line)?;
        let computed = board.checksum();
        if declared != computed {
            return Err(ProtocolError::ChecksumMismatch { declared, computed }.into());
        }
        Ok(board)
    }

    /// Send a shot: target column then target row.
    pub async fn send_shot(
        transport: &mut dyn Transport,
        x: u8,
        y: u8,
    ) -> anyhow::Result<()> {
        transport.send_line(&x.to_string()).await?;
        transport.send_line(&y.to_string()).await?;
        Ok(())
    }

    /// Receive a shot coordinate pair.
    pub async fn recv_shot(transport: &mut dyn Transport) -> anyhow::Result<(u8, u8)> {
        let x = parse_coord(&transport.recv_line().await?)?;
        let y = parse_coord(&transport.recv_line().await?)?;
        Ok((x, y))
    }

    /// Reply with the cell code recorded for the incoming shot.
    pub async fn send_outcome(
        transport: &mut dyn Transport,
        outcome: ShotOutcome,
    ) -> anyhow::Result<()> {
        transport
            .send_line(&format!("{}", outcome_code(outcome).code()))
            .await
    }

    /// Receive the defender's outcome reply for our last shot.
    pub async fn recv_outcome(
        transport: &mut dyn Transport,
    ) -> anyhow::Result<ShotOutcome> {
        let line = transport.recv_line().await?;
        Ok(parse_outcome(&line)?)
    }

    /// Send the termination sentinel twice. Errors are ignored: the peer
    /// may already be gone, and teardown must not fail because of it.
    pub async fn send_quit(transport: &mut dyn Transport) {
        for _ in 0..2 {
            if transport.send_line(TOKEN_QUIT).await.is_err() {
                break;
            }
        }
    }
}
