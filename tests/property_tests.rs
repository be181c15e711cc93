//! Property tests over random games and boards.

use proptest::prelude::*;

use quoridor_engine::board::Board;
use quoridor_engine::core::{CornerAddress, Direction, MatchConfig, MatchId, Participant, ParticipantId, Seat};
use quoridor_engine::game::{Match, MatchPhase};
use quoridor_engine::rules;

/// One step of a random game: `wall` picks the action kind, the indices pick
/// among the currently legal options.
fn step_strategy() -> impl Strategy<Value = (bool, usize, usize)> {
    (any::<bool>(), 0usize..256, 0usize..4)
}

fn participant_for(seat: Seat) -> ParticipantId {
    ParticipantId(seat.index() as u64 + 1)
}

fn play(size: u8, walls: u8, steps: &[(bool, usize, usize)]) -> Match {
    let config = MatchConfig::new().with_grid_size(size).with_walls_per_player(walls);
    let mut game = Match::new(MatchId(1), config).unwrap();
    game.join(Participant::new(ParticipantId(1), "a"));
    game.join(Participant::new(ParticipantId(2), "b"));

    for &(wall, pick, completion) in steps {
        let who = participant_for(game.current_seat());
        let anchors = if wall { game.legal_wall_anchors().unwrap() } else { Vec::new() };
        if !anchors.is_empty() {
            let anchor = anchors[pick % anchors.len()];
            let ends = game.legal_wall_completions(anchor).unwrap();
            game.request_wall_placement(who, anchor, ends[completion % ends.len()]).unwrap();
            continue;
        }
        let moves = game.legal_moves().unwrap();
        if moves.is_empty() {
            break;
        }
        game.request_move(who, moves[pick % moves.len()]).unwrap();
    }
    game
}

proptest! {
    /// No reachable state leaves either pawn without a path.
    #[test]
    fn prop_blocking_invariant(steps in prop::collection::vec(step_strategy(), 0..40)) {
        let game = play(5, 5, &steps);
        prop_assert_eq!(game.phase(), MatchPhase::InProgress);
        for seat in Seat::ALL {
            let player = game.player(seat).unwrap();
            prop_assert!(!rules::is_player_blocked(game.board(), player).unwrap());
            prop_assert!(player.walls_remaining() <= 5);
        }
        let spent: usize = Seat::ALL
            .iter()
            .map(|&seat| usize::from(5 - game.player(seat).unwrap().walls_remaining()))
            .sum();
        prop_assert_eq!(spent, game.board().walls().len());
        prop_assert_eq!(game.board().placed_segments().count(), 2 * game.board().walls().len());
    }

    /// Every reachable state survives a snapshot round trip.
    #[test]
    fn prop_snapshot_restores(steps in prop::collection::vec(step_strategy(), 0..30)) {
        let game = play(5, 4, &steps);
        let snapshot = game.snapshot();
        let restored = Match::restore(snapshot.clone()).unwrap();
        prop_assert_eq!(restored.snapshot(), snapshot);
        prop_assert_eq!(restored.legal_moves().unwrap(), game.legal_moves().unwrap());
    }

    /// Legal moves stay on the board, never land on the opponent, and the
    /// query is stable.
    #[test]
    fn prop_moves_well_formed(steps in prop::collection::vec(step_strategy(), 0..30)) {
        let game = play(6, 6, &steps);
        let moves = game.legal_moves().unwrap();
        prop_assert_eq!(&moves, &game.legal_moves().unwrap());
        let opponent = game.player(game.current_seat().opponent()).unwrap().position();
        for target in &moves {
            prop_assert!(target.is_within(6));
            prop_assert_ne!(*target, opponent);
        }
    }

    /// Sides are shared symmetrically for any grid size.
    #[test]
    fn prop_topology_symmetric(size in 2u8..16) {
        let board = Board::build(size).unwrap();
        let n = size as usize;
        prop_assert_eq!(board.segments().len(), 2 * n * (n + 1));
        prop_assert_eq!(board.corners().count(), (n + 1) * (n + 1));
        for cell in board.cells() {
            for dir in Direction::ALL {
                if let Some(next) = cell.address().step(dir, size) {
                    prop_assert_eq!(cell.side(dir), board.cell(next).unwrap().side(dir.opposite()));
                }
            }
        }
    }

    /// Segment lookup accepts exactly the lattice-adjacent pairs.
    #[test]
    fn prop_segment_lookup(x in 0u8..10, y in 0u8..10, dx in -1i16..=1, dy in -1i16..=1) {
        let board = Board::build(9).unwrap();
        let a = CornerAddress::new(x, y);
        if let Some(b) = a.offset(dx, dy, 9) {
            let adjacent = (dx == 0) != (dy == 0);
            prop_assert_eq!(board.segment(a, b).is_some(), adjacent);
        }
    }
}
