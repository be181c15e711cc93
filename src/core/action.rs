//! Action representation: the two kinds of turn a player can take.
//!
//! A turn is either a pawn move or a wall placement. Committed actions are
//! logged as [`ActionRecord`]s in the match history for replay and
//! debugging; the log is cleared whenever the board resets.

use serde::{Deserialize, Serialize};

use super::coord::CellAddress;
use super::player::Seat;
use crate::board::Wall;

/// A committed turn.
///
/// ## Example
///
/// ```
/// use quoridor_engine::board::Wall;
/// use quoridor_engine::core::{Action, CellAddress, CornerAddress};
///
/// let step = Action::Move {
///     from: CellAddress::new(0, 4),
///     to: CellAddress::new(1, 4),
/// };
/// assert!(!step.is_wall());
///
/// let wall = Wall::between(CornerAddress::new(3, 2), CornerAddress::new(3, 4)).unwrap();
/// assert!(Action::PlaceWall(wall).is_wall());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Pawn moved (possibly by a jump).
    Move { from: CellAddress, to: CellAddress },
    /// Wall committed to the board.
    PlaceWall(Wall),
}

impl Action {
    /// Whether this action spent a wall.
    #[must_use]
    pub fn is_wall(&self) -> bool {
        matches!(self, Action::PlaceWall(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { from, to } => write!(f, "move {from} -> {to}"),
            Action::PlaceWall(wall) => write!(f, "wall {wall}"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub seat: Seat,

    /// The action taken.
    pub action: Action,

    /// Turn number within the current game, starting at 0.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(seat: Seat, action: Action, turn: u32) -> Self {
        Self { seat, action, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CornerAddress;

    #[test]
    fn test_action_display() {
        let step = Action::Move {
            from: CellAddress::new(8, 4),
            to: CellAddress::new(7, 4),
        };
        assert_eq!(step.to_string(), "move (8, 4) -> (7, 4)");

        let wall = Wall::between(CornerAddress::new(2, 2), CornerAddress::new(4, 2)).unwrap();
        assert_eq!(Action::PlaceWall(wall).to_string(), "wall <2, 2>-<4, 2>");
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            Seat::Second,
            Action::Move {
                from: CellAddress::new(8, 4),
                to: CellAddress::new(7, 4),
            },
            1,
        );
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
