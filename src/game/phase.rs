//! Match lifecycle phase and participant roles.

use serde::{Deserialize, Serialize};

use crate::core::Seat;

/// Where a match is in its lifecycle.
///
/// `WaitingForPlayers -> InProgress -> Finished -> InProgress`. `Finished` is
/// only held inside the winning move while the victory is logged and the
/// board reset. It is never returned from a query or stored in a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// At least one seat is empty.
    WaitingForPlayers,
    /// Both seats filled; turns are accepted.
    InProgress,
    /// A victory was just recorded; the reset follows immediately.
    Finished,
}

impl MatchPhase {
    /// Whether turns are accepted.
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        self == MatchPhase::InProgress
    }
}

impl std::fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPhase::WaitingForPlayers => write!(f, "waiting for players"),
            MatchPhase::InProgress => write!(f, "in progress"),
            MatchPhase::Finished => write!(f, "finished"),
        }
    }
}

/// What a participant is to a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Seated in one of the two player slots.
    Player(Seat),
    /// Watching only.
    Spectator,
}

impl Role {
    /// The seat, if seated.
    #[must_use]
    pub fn seat(self) -> Option<Seat> {
        match self {
            Role::Player(seat) => Some(seat),
            Role::Spectator => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(MatchPhase::WaitingForPlayers.to_string(), "waiting for players");
        assert!(MatchPhase::InProgress.is_in_progress());
        assert!(!MatchPhase::Finished.is_in_progress());
    }

    #[test]
    fn test_role_seat() {
        assert_eq!(Role::Player(Seat::Second).seat(), Some(Seat::Second));
        assert_eq!(Role::Spectator.seat(), None);
    }
}
