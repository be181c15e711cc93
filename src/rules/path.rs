//! Reachability from a pawn to its goal row.

use std::collections::VecDeque;

use tracing::trace;

use crate::board::{Board, SegmentId};
use crate::core::{Direction, InvariantViolation, Player};

/// Whether `player` has no path to any of its victory cells.
pub fn is_player_blocked(board: &Board, player: &Player) -> Result<bool, InvariantViolation> {
    Ok(search(board, player, &[])?.is_none())
}

/// Fewest steps from `player`'s pawn to its goal row, ignoring the other
/// pawn. `None` when the player is walled off.
pub fn distance_to_goal(board: &Board, player: &Player) -> Result<Option<u32>, InvariantViolation> {
    search(board, player, &[])
}

/// Blocking check treating `extra` segments as placed.
pub(crate) fn is_blocked_with(
    board: &Board,
    player: &Player,
    extra: &[SegmentId],
) -> Result<bool, InvariantViolation> {
    Ok(search(board, player, extra)?.is_none())
}

/// Breadth-first search over cells, crossing only unplaced segments.
///
/// Stops at the first victory cell dequeued or discovered; the visited set and
/// frontier live for this call only.
fn search(board: &Board, player: &Player, extra: &[SegmentId]) -> Result<Option<u32>, InvariantViolation> {
    let size = board.size();
    let seat = player.seat();
    let start = player.position();

    if board.expect_cell(start)?.is_victory_for(seat) {
        return Ok(Some(0));
    }

    let mut visited = vec![false; size as usize * size as usize];
    let mut frontier = VecDeque::new();
    visited[start.index(size)] = true;
    frontier.push_back((start, 0u32));

    while let Some((cell, distance)) = frontier.pop_front() {
        for dir in Direction::ALL {
            let side = board.side(cell, dir)?;
            if side.is_placed() || extra.contains(&side.id()) {
                continue;
            }
            let Some(next) = cell.step(dir, size) else {
                continue;
            };
            let slot = next.index(size);
            if visited[slot] {
                continue;
            }
            if board.expect_cell(next)?.is_victory_for(seat) {
                trace!(%seat, from = %start, steps = distance + 1, "goal reachable");
                return Ok(Some(distance + 1));
            }
            visited[slot] = true;
            frontier.push_back((next, distance + 1));
        }
    }

    trace!(%seat, from = %start, "goal unreachable");
    Ok(None)
}
