//! Results of committed turns and the victory log entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::Wall;
use crate::core::{CellAddress, ParticipantId, Player, Seat};

/// One entry of a match's victory log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryRecord {
    /// When the winning move was committed.
    pub at: DateTime<Utc>,
    /// Winner's identity.
    pub participant: ParticipantId,
    /// Winner's display name at the time.
    pub name: String,
    /// Seat the winner played from.
    pub seat: Seat,
}

impl VictoryRecord {
    /// Record a win by `player` at `at`.
    #[must_use]
    pub fn new(player: &Player, at: DateTime<Utc>) -> Self {
        Self {
            at,
            participant: player.id(),
            name: player.name().to_string(),
            seat: player.seat(),
        }
    }
}

/// Result of an accepted pawn move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The pawn moved; the turn passed to `next`.
    Moved {
        from: CellAddress,
        to: CellAddress,
        next: Seat,
    },
    /// The pawn reached its goal row. The match has already been reset and
    /// player 1 is to move.
    Victory(VictoryRecord),
}

impl MoveOutcome {
    /// Whether this move won the game.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        matches!(self, MoveOutcome::Victory(_))
    }
}

/// Result of an accepted wall placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallOutcome {
    /// The committed wall.
    pub wall: Wall,
    /// Who placed it.
    pub seat: Seat,
    /// Walls the placer has left.
    pub walls_remaining: u8,
    /// Seat to move next.
    pub next: Seat,
}
