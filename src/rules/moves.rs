//! Pawn movement, including jumps over the opponent.

use smallvec::SmallVec;
use tracing::trace;

use crate::board::Board;
use crate::core::{CellAddress, Direction, InvariantViolation, Player};

/// Destinations available to `mover` this turn.
///
/// Each open orthogonal neighbour is a destination unless the opponent stands
/// on it. In that case the mover may jump straight over the opponent, or, if
/// a wall or the board edge stops the straight jump, step diagonally to either
/// side of the opponent where no wall intervenes.
///
/// Order follows [`Direction::ALL`]; an empty result is valid.
pub fn legal_moves(
    board: &Board,
    mover: &Player,
    opponent: &Player,
) -> Result<SmallVec<[CellAddress; 8]>, InvariantViolation> {
    let from = mover.position();
    let blocker = opponent.position();
    let mut targets = SmallVec::new();

    for dir in Direction::ALL {
        let Some(next) = board.neighbor(from, dir)? else {
            continue;
        };
        if next != blocker {
            targets.push(next);
            continue;
        }

        if let Some(beyond) = board.neighbor(blocker, dir)? {
            targets.push(beyond);
            continue;
        }
        for side in dir.perpendicular() {
            if let Some(diagonal) = board.neighbor(blocker, side)? {
                targets.push(diagonal);
            }
        }
    }

    trace!(seat = %mover.seat(), %from, count = targets.len(), "legal moves");
    Ok(targets)
}
