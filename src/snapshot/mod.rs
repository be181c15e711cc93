//! Serializable match state.
//!
//! [`MatchSnapshot`] captures everything needed to rebuild a match except its
//! listeners. It derives serde, so hosts can use any serde format; a compact
//! binary codec is provided with [`MatchSnapshot::to_bytes`] and
//! [`MatchSnapshot::from_bytes`].
//!
//! [`Match::restore`](crate::game::Match::restore) never trusts a snapshot:
//! the board is rebuilt from the configuration and every wall and pawn is
//! re-checked against the board invariants.

mod restore;

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Wall;
use crate::core::{ActionRecord, InvariantViolation, MatchConfig, MatchId, Participant, Player, Seat, SeatMap};
use crate::game::{Match, MatchPhase, VictoryRecord};

/// Failure to decode or restore a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The bytes are not a snapshot.
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// The snapshot decodes but describes an impossible match.
    #[error("invalid snapshot: {0}")]
    Invalid(#[from] InvariantViolation),
}

/// Full public state of a match at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub id: MatchId,
    pub config: MatchConfig,
    pub phase: MatchPhase,
    pub current: Seat,
    pub players: SeatMap<Option<Player>>,
    /// Sorted by participant id.
    pub spectators: Vec<Participant>,
    /// Committed walls in placement order.
    pub walls: Vec<Wall>,
    pub victories: Vector<VictoryRecord>,
    pub history: Vector<ActionRecord>,
    pub turn: u32,
}

impl MatchSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`MatchSnapshot::to_bytes`]. The result is
    /// not validated until passed to [`Match::restore`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// The player to move, if seated.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players[self.current].as_ref()
    }
}

impl Match {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        let mut spectators: Vec<Participant> = self.spectators().cloned().collect();
        spectators.sort_by_key(|p| p.id);
        MatchSnapshot {
            id: self.id(),
            config: *self.config(),
            phase: self.phase(),
            current: self.current_seat(),
            players: self.players().clone(),
            spectators,
            walls: self.board().walls().to_vec(),
            victories: self.victories().clone(),
            history: self.history().clone(),
            turn: self.turn(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellAddress, CornerAddress, ParticipantId};

    fn playing() -> Match {
        let mut m = Match::new(MatchId(3), MatchConfig::default()).unwrap();
        m.join(Participant::new(ParticipantId(1), "alice"));
        m.join(Participant::new(ParticipantId(2), "bob"));
        m.join(Participant::new(ParticipantId(9), "zed"));
        m.join(Participant::new(ParticipantId(5), "eve"));
        m
    }

    #[test]
    fn test_snapshot_contents() {
        let mut m = playing();
        m.request_move(ParticipantId(1), CellAddress::new(1, 4)).unwrap();
        m.request_wall_placement(ParticipantId(2), CornerAddress::new(3, 3), CornerAddress::new(3, 5))
            .unwrap();

        let snap = m.snapshot();
        assert_eq!(snap.id, MatchId(3));
        assert_eq!(snap.phase, MatchPhase::InProgress);
        assert_eq!(snap.current, Seat::First);
        assert_eq!(snap.walls.len(), 1);
        assert_eq!(snap.history.len(), 2);
        assert_eq!(snap.turn, 2);
        assert_eq!(
            snap.spectators.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![ParticipantId(5), ParticipantId(9)]
        );
        assert_eq!(snap.current_player().unwrap().id(), ParticipantId(1));
    }

    #[test]
    fn test_bytes_roundtrip() {
        let m = playing();
        let snap = m.snapshot();
        let bytes = snap.to_bytes().unwrap();
        assert_eq!(MatchSnapshot::from_bytes(&bytes).unwrap(), snap);
    }

    #[test]
    fn test_garbage_bytes_fail() {
        let err = MatchSnapshot::from_bytes(&[0xff, 0x01]).unwrap_err();
        assert!(matches!(err, SnapshotError::Codec(_)));
    }
}
