//! Common types: shot outcomes and the error taxonomy.

use core::fmt;

/// Resolved outcome of a single shot, as reported by the defending side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Hit,
    Miss,
}

/// Errors returned by board cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the 10x10 grid.
    OutOfBounds,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "coordinate is outside the board"),
        }
    }
}

/// Errors from fleet placement and interactive ship moves. Recoverable:
/// the attempted move is rejected and the prior position kept, nothing is
/// sent to the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Two ships' occupied cells intersect.
    Overlap,
    /// A ship extends past the board edge.
    OutOfBounds,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Overlap => write!(f, "ship placement overlaps another ship"),
            PlacementError::OutOfBounds => write!(f, "ship placement is out of bounds"),
        }
    }
}

/// Errors from firing on the guess board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target cell was already fired at; no turn is consumed.
    AlreadyGuessed,
    /// Target coordinate outside the board.
    OutOfBounds,
    /// The game has already reached a terminal state.
    GameOver,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::AlreadyGuessed => write!(f, "cell was already guessed"),
            ShotError::OutOfBounds => write!(f, "target is outside the board"),
            ShotError::GameOver => write!(f, "game is already over"),
        }
    }
}

/// Protocol-level failures while talking to the peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Declared board checksum does not match the recomputed sum. Fatal,
    /// never retried: a corrupted board must not be played through.
    ChecksumMismatch { declared: u32, computed: u32 },
    /// Unparsable or unexpected token. Treated like a peer quit.
    Malformed,
    /// The peer sent the termination sentinel.
    PeerQuit,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::ChecksumMismatch { declared, computed } => write!(
                f,
                "board checksum mismatch: peer declared {}, computed {}",
                declared, computed
            ),
            ProtocolError::Malformed => write!(f, "malformed protocol token"),
            ProtocolError::PeerQuit => write!(f, "peer quit the session"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}
