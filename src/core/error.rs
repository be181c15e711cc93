//! Error taxonomy.
//!
//! Two disjoint families:
//!
//! - [`Rejection`]: a request the rules refuse. Recoverable, reported to the
//!   caller, never accompanied by any mutation.
//! - [`InvariantViolation`]: the engine's own state is inconsistent (a lookup
//!   failed for something that must exist by construction, or a restored
//!   snapshot breaks a board invariant). Indicates a bug or corrupt input.
//!
//! [`EngineError`] wraps both so operations can propagate either with `?`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::{CellAddress, CornerAddress};
use super::id::{MatchId, ParticipantId};
use super::player::Seat;
use crate::game::MatchPhase;

/// Why a wall placement was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallFault {
    /// A corner lies outside the lattice.
    OutOfBounds,
    /// Corners are not consecutive lattice points (one unit apart).
    NotAdjacent,
    /// Corners do not lie on a single grid line.
    NotCollinear,
    /// One of the two segments already carries a wall.
    Occupied,
    /// The wall would leave this seat without a path to its goal row.
    BlocksPath(Seat),
    /// The anchor corner has no legal second corner.
    NoCompletions,
}

impl std::fmt::Display for WallFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WallFault::OutOfBounds => write!(f, "corner outside the board"),
            WallFault::NotAdjacent => write!(f, "corners are not consecutive"),
            WallFault::NotCollinear => write!(f, "corners are not on one grid line"),
            WallFault::Occupied => write!(f, "segment already occupied"),
            WallFault::BlocksPath(seat) => write!(f, "would block {seat}"),
            WallFault::NoCompletions => write!(f, "anchor has no legal completion"),
        }
    }
}

/// A refused request. The match is left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Not the current player, or not seated at all.
    #[error("{0} may not act now")]
    InvalidParticipant(ParticipantId),

    /// Target is not in the current legal-move set.
    #[error("{0} is not a legal destination")]
    IllegalMove(CellAddress),

    /// Wall geometry, occupancy or path-blocking check failed.
    #[error("illegal wall placement: {0}")]
    IllegalWallPlacement(WallFault),

    /// The current player has no walls left.
    #[error("no walls remaining")]
    NoWallsRemaining,

    /// The match is waiting for players (or between games).
    #[error("match is not in progress ({0})")]
    MatchNotInProgress(MatchPhase),

    /// Match configuration cannot host a game.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// No match with this id is hosted.
    #[error("unknown {0}")]
    UnknownMatch(MatchId),
}

/// Flat reason code for hosts that relay rejections over the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectCode {
    InvalidParticipant,
    IllegalMove,
    IllegalWallPlacement,
    NoWallsRemaining,
    MatchNotInProgress,
    InvalidConfiguration,
    UnknownMatch,
}

impl Rejection {
    /// Reason code without the context payload.
    #[must_use]
    pub fn code(&self) -> RejectCode {
        match self {
            Rejection::InvalidParticipant(_) => RejectCode::InvalidParticipant,
            Rejection::IllegalMove(_) => RejectCode::IllegalMove,
            Rejection::IllegalWallPlacement(_) => RejectCode::IllegalWallPlacement,
            Rejection::NoWallsRemaining => RejectCode::NoWallsRemaining,
            Rejection::MatchNotInProgress(_) => RejectCode::MatchNotInProgress,
            Rejection::InvalidConfiguration(_) => RejectCode::InvalidConfiguration,
            Rejection::UnknownMatch(_) => RejectCode::UnknownMatch,
        }
    }
}

impl From<WallFault> for Rejection {
    fn from(fault: WallFault) -> Self {
        Rejection::IllegalWallPlacement(fault)
    }
}

/// Internal inconsistency. Never caused by a well-formed request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A cell that must exist is absent from the arena.
    #[error("cell {0} missing from board topology")]
    MissingCell(CellAddress),

    /// A segment that must exist is absent from the arena.
    #[error("segment {0}-{1} missing from board topology")]
    MissingSegment(CornerAddress, CornerAddress),

    /// A restored or mutated state breaks a board/player invariant.
    #[error("inconsistent state: {0}")]
    Inconsistent(String),
}

/// Any failure surfaced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The request was refused by the rules.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The engine found its own state inconsistent.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl EngineError {
    /// The rejection, if this is a rules refusal.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            EngineError::Rejected(r) => Some(r),
            EngineError::Invariant(_) => None,
        }
    }

    /// Whether this signals a bug rather than a refused request.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, EngineError::Invariant(_))
    }
}

impl From<WallFault> for EngineError {
    fn from(fault: WallFault) -> Self {
        EngineError::Rejected(fault.into())
    }
}
