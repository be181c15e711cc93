//! Validated reconstruction of a match from a snapshot.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::info;

use super::{MatchSnapshot, SnapshotError};
use crate::board::Board;
use crate::core::{InvariantViolation, Player};
use crate::game::{Match, MatchParts, MatchPhase};
use crate::rules;

fn inconsistent(message: impl Into<String>) -> InvariantViolation {
    InvariantViolation::Inconsistent(message.into())
}

impl Match {
    /// Rebuild a match from `snapshot`, re-checking every board and player
    /// invariant. Listeners are not part of a snapshot and start empty.
    pub fn restore(snapshot: MatchSnapshot) -> Result<Self, SnapshotError> {
        let MatchSnapshot {
            id,
            config,
            phase,
            current,
            players,
            spectators,
            walls,
            victories,
            history,
            turn,
        } = snapshot;

        config
            .validate()
            .map_err(|rejection| inconsistent(format!("configuration: {rejection}")))?;
        let size = config.grid_size;
        let mut board =
            Board::build(size).map_err(|rejection| inconsistent(format!("configuration: {rejection}")))?;

        for (seat, player) in players.iter() {
            let Some(player) = player else {
                continue;
            };
            if player.seat() != seat {
                return Err(inconsistent(format!("{seat} slot holds {}", player.seat())).into());
            }
            if board.expect_cell(player.position())?.is_victory_for(seat) {
                return Err(inconsistent(format!("{seat} is already on its goal row")).into());
            }
            if player.walls_remaining() > config.walls_per_player {
                return Err(inconsistent(format!("{seat} holds more walls than configured")).into());
            }
        }

        let seated: SmallVec<[&Player; 2]> = players.iter().filter_map(|(_, p)| p.as_ref()).collect();
        if let [a, b] = seated.as_slice() {
            if a.position() == b.position() {
                return Err(inconsistent(format!("both pawns on {}", a.position())).into());
            }
            if a.id() == b.id() {
                return Err(inconsistent(format!("{} seated twice", a.id())).into());
            }
        }

        let full = seated.len() == 2;
        match phase {
            MatchPhase::WaitingForPlayers if full => {
                return Err(inconsistent("waiting for players with both seats filled").into());
            }
            MatchPhase::InProgress if !full => {
                return Err(inconsistent(format!("{phase} with an empty seat")).into());
            }
            MatchPhase::Finished => {
                return Err(inconsistent("finished is never a resting phase").into());
            }
            _ => {}
        }

        for wall in &walls {
            board
                .place(*wall)
                .map_err(|fault| inconsistent(format!("wall {wall}: {fault}")))?;
        }
        let spent: usize = seated
            .iter()
            .map(|p| usize::from(config.walls_per_player - p.walls_remaining()))
            .sum();
        if spent != walls.len() {
            return Err(inconsistent(format!("{} walls on board but {spent} spent", walls.len())).into());
        }
        for player in &seated {
            if rules::is_player_blocked(&board, player)? {
                return Err(inconsistent(format!("{} has no path to its goal row", player.seat())).into());
            }
        }

        if history.len() != turn as usize {
            return Err(inconsistent(format!("history has {} entries at turn {turn}", history.len())).into());
        }

        let mut spectator_map = FxHashMap::default();
        for participant in spectators {
            if seated.iter().any(|p| p.id() == participant.id) {
                return Err(inconsistent(format!("{} is both seated and spectating", participant.id)).into());
            }
            let pid = participant.id;
            if spectator_map.insert(pid, participant).is_some() {
                return Err(inconsistent(format!("{pid} listed twice")).into());
            }
        }
        drop(seated);

        info!(match_id = %id, walls = walls.len(), %phase, "match restored");

        Ok(Match::from_parts(MatchParts {
            id,
            config,
            board,
            players,
            spectators: spectator_map,
            current,
            phase,
            victories,
            history,
            turn,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Wall;
    use crate::core::{CellAddress, CornerAddress, MatchConfig, MatchId, Participant, ParticipantId, Seat};

    fn c(x: u8, y: u8) -> CornerAddress {
        CornerAddress::new(x, y)
    }

    fn playing() -> Match {
        let mut m = Match::new(MatchId(1), MatchConfig::default()).unwrap();
        m.join(Participant::new(ParticipantId(1), "alice"));
        m.join(Participant::new(ParticipantId(2), "bob"));
        m
    }

    fn expect_invalid(snapshot: MatchSnapshot) {
        match Match::restore(snapshot) {
            Err(SnapshotError::Invalid(InvariantViolation::Inconsistent(_))) => {}
            other => panic!("expected inconsistent snapshot, got {other:?}"),
        }
    }

    #[test]
    fn test_restore_roundtrip() {
        let mut m = playing();
        m.join(Participant::new(ParticipantId(3), "carol"));
        m.request_move(ParticipantId(1), CellAddress::new(1, 4)).unwrap();
        m.request_wall_placement(ParticipantId(2), c(2, 3), c(2, 5)).unwrap();

        let snap = m.snapshot();
        let restored = Match::restore(snap.clone()).unwrap();
        assert_eq!(restored.snapshot(), snap);
        assert_eq!(restored.board().placed_segments().count(), 2);
        assert_eq!(restored.legal_moves().unwrap(), m.legal_moves().unwrap());
    }

    #[test]
    fn test_restore_rejects_overlapping_walls() {
        let mut m = playing();
        m.request_wall_placement(ParticipantId(1), c(4, 4), c(4, 6)).unwrap();
        let mut snap = m.snapshot();
        snap.walls.push(Wall::between(c(4, 5), c(4, 7)).unwrap());
        expect_invalid(snap);
    }

    #[test]
    fn test_restore_rejects_unspent_walls() {
        let mut snap = playing().snapshot();
        snap.walls.push(Wall::between(c(4, 4), c(4, 6)).unwrap());
        expect_invalid(snap);
    }

    #[test]
    fn test_restore_rejects_shared_cell() {
        let mut snap = playing().snapshot();
        if let Some(p) = snap.players[Seat::Second].as_mut() {
            p.move_to(CellAddress::new(0, 4));
        }
        expect_invalid(snap);
    }

    #[test]
    fn test_restore_rejects_off_board_pawn() {
        let mut snap = playing().snapshot();
        if let Some(p) = snap.players[Seat::First].as_mut() {
            p.move_to(CellAddress::new(12, 0));
        }
        assert!(matches!(
            Match::restore(snap),
            Err(SnapshotError::Invalid(InvariantViolation::MissingCell(_)))
        ));
    }

    #[test]
    fn test_restore_rejects_phase_mismatch() {
        let mut snap = playing().snapshot();
        snap.phase = MatchPhase::WaitingForPlayers;
        expect_invalid(snap);
    }

    #[test]
    fn test_restore_rejects_finished_phase() {
        let mut snap = playing().snapshot();
        snap.phase = MatchPhase::Finished;
        expect_invalid(snap);
    }

    #[test]
    fn test_restore_hands_over_players() {
        let snap = playing().snapshot();
        let restored = Match::restore(snap).unwrap();
        assert_eq!(restored.player(Seat::First).unwrap().id(), ParticipantId(1));
        assert_eq!(restored.player(Seat::Second).unwrap().id(), ParticipantId(2));
        assert_eq!(restored.phase(), MatchPhase::InProgress);
    }
}
