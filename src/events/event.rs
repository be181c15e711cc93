//! Match events.

use serde::{Deserialize, Serialize};

use crate::board::Wall;
use crate::core::{CellAddress, Seat};
use crate::game::VictoryRecord;

/// Something that just happened to a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Wall or pawn state changed; sent after every committed turn and reset.
    BoardChanged,

    /// A wall was committed.
    WallPlaced { seat: Seat, wall: Wall },

    /// A pawn moved.
    PlayerMoved {
        seat: Seat,
        from: CellAddress,
        to: CellAddress,
    },

    /// A pawn reached its goal row. The match is about to reset.
    Victory(VictoryRecord),

    /// The post-victory reset completed; a new game is in progress.
    VictoryFinished,

    /// Someone joined or left (seated or spectating).
    ParticipantsChanged,
}

/// Payload-free discriminant of [`MatchEvent`], used to filter listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    BoardChanged,
    WallPlaced,
    PlayerMoved,
    Victory,
    VictoryFinished,
    ParticipantsChanged,
}

impl MatchEvent {
    /// The kind of this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            MatchEvent::BoardChanged => EventKind::BoardChanged,
            MatchEvent::WallPlaced { .. } => EventKind::WallPlaced,
            MatchEvent::PlayerMoved { .. } => EventKind::PlayerMoved,
            MatchEvent::Victory(_) => EventKind::Victory,
            MatchEvent::VictoryFinished => EventKind::VictoryFinished,
            MatchEvent::ParticipantsChanged => EventKind::ParticipantsChanged,
        }
    }
}
