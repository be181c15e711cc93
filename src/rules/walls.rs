//! Wall-placement legality.

use smallvec::SmallVec;
use tracing::trace;

use super::path::is_blocked_with;
use crate::board::{Board, Wall};
use crate::core::{CornerAddress, EngineError, InvariantViolation, Player, WallFault};

/// Offsets from an anchor to every corner two lattice units away on one axis.
const COMPLETION_OFFSETS: [(i16, i16); 4] = [(-2, 0), (0, 2), (2, 0), (0, -2)];

/// Full legality check for `wall`: geometry, occupancy, then the blocking
/// check for every player in `players`.
///
/// Rule failures surface as [`EngineError::Rejected`] carrying the
/// [`WallFault`]; lookup failures as [`EngineError::Invariant`].
pub fn check_wall_placement(board: &Board, players: &[&Player], wall: &Wall) -> Result<(), EngineError> {
    let segments = board.check_wall(wall)?;
    for player in players {
        if is_blocked_with(board, player, &segments)? {
            return Err(WallFault::BlocksPath(player.seat()).into());
        }
    }
    Ok(())
}

/// Corners that complete a legal wall starting at `anchor`.
///
/// Empty when `anchor` is off the lattice or every candidate fails.
pub fn legal_second_corners(
    board: &Board,
    players: &[&Player],
    anchor: CornerAddress,
) -> Result<SmallVec<[CornerAddress; 4]>, InvariantViolation> {
    let mut completions = SmallVec::new();
    if !anchor.is_within(board.size()) {
        return Ok(completions);
    }

    for (dx, dy) in COMPLETION_OFFSETS {
        let Some(end) = anchor.offset(dx, dy, board.size()) else {
            continue;
        };
        let Ok(wall) = Wall::between(anchor, end) else {
            continue;
        };
        match check_wall_placement(board, players, &wall) {
            Ok(()) => completions.push(end),
            Err(EngineError::Rejected(_)) => {}
            Err(EngineError::Invariant(violation)) => return Err(violation),
        }
    }

    trace!(%anchor, count = completions.len(), "wall completions");
    Ok(completions)
}

/// Corners with at least one legal completion, row-major.
pub fn legal_anchors(board: &Board, players: &[&Player]) -> Result<Vec<CornerAddress>, InvariantViolation> {
    let mut anchors = Vec::new();
    for corner in board.corners() {
        if !legal_second_corners(board, players, corner)?.is_empty() {
            anchors.push(corner);
        }
    }
    trace!(count = anchors.len(), "wall anchors");
    Ok(anchors)
}
