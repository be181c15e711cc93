//! Board topology integration tests.
//!
//! These tests check the arena wiring for several grid sizes and the
//! all-or-nothing behavior of wall mutation.

use std::collections::HashSet;

use quoridor_engine::board::{Board, Wall};
use quoridor_engine::core::{CellAddress, CornerAddress, Direction, Orientation, Seat, WallFault};

fn c(x: u8, y: u8) -> CornerAddress {
    CornerAddress::new(x, y)
}

/// Every cell has four distinct sides, shared symmetrically with neighbours.
#[test]
fn test_topology_completeness() {
    for size in [2u8, 3, 5, 9, 11] {
        let board = Board::build(size).unwrap();
        for cell in board.cells() {
            let sides: HashSet<_> = cell.sides().into_iter().collect();
            assert_eq!(sides.len(), 4, "cell {} must have 4 distinct sides", cell.address());

            for dir in Direction::ALL {
                let segment = board.side(cell.address(), dir).unwrap();
                assert!(segment.borders(cell.address()));

                if let Some(next) = cell.address().step(dir, size) {
                    let shared = board.side(next, dir.opposite()).unwrap();
                    assert_eq!(segment.id(), shared.id(), "{} {:?} not shared with {}", cell.address(), dir, next);
                    assert!(!segment.is_perimeter());
                } else {
                    assert!(segment.is_perimeter());
                }
            }
        }
    }
}

/// No two corner pairs map to the same segment.
#[test]
fn test_segment_uniqueness() {
    for size in [2u8, 4, 9] {
        let board = Board::build(size).unwrap();
        let n = size as usize;
        assert_eq!(board.segments().len(), 2 * n * (n + 1));

        let pairs: HashSet<_> = board.segments().iter().map(|s| (s.from(), s.to())).collect();
        assert_eq!(pairs.len(), board.segments().len());

        let horizontal = board
            .segments()
            .iter()
            .filter(|s| s.orientation() == Orientation::Horizontal)
            .count();
        assert_eq!(horizontal, n * (n + 1));
    }
}

#[test]
fn test_segment_lookup_is_order_independent() {
    let board = Board::build(9).unwrap();
    for corner in board.corners() {
        for (dx, dy) in [(0i16, 1i16), (1, 0)] {
            if let Some(other) = corner.offset(dx, dy, 9) {
                let forward = board.segment(corner, other).unwrap();
                let backward = board.segment(other, corner).unwrap();
                assert_eq!(forward.id(), backward.id());
            }
        }
    }
}

#[test]
fn test_victory_cells_follow_home_rows() {
    let board = Board::build(9).unwrap();
    for cell in board.cells() {
        let row = cell.address().row();
        assert_eq!(cell.is_victory_for(Seat::First), row == 8);
        assert_eq!(cell.is_victory_for(Seat::Second), row == 0);
    }
}

#[test]
fn test_wall_placement_is_atomic() {
    let mut board = Board::build(9).unwrap();
    board.place_wall(c(3, 3), c(3, 4), c(3, 5)).unwrap();

    // Overlaps the second segment only: neither segment of the new wall flips.
    assert_eq!(board.place_wall(c(3, 4), c(3, 5), c(3, 6)), Err(WallFault::Occupied));
    assert!(!board.segment(c(3, 5), c(3, 6)).unwrap().is_placed());
    assert_eq!(board.placed_segments().count(), 2);
    assert_eq!(board.walls().len(), 1);
}

#[test]
fn test_crossing_walls_are_allowed() {
    let mut board = Board::build(9).unwrap();
    board.place_wall(c(4, 3), c(4, 4), c(4, 5)).unwrap();
    // Perpendicular wall through the same midpoint shares no segment.
    assert!(board.place_wall(c(3, 4), c(4, 4), c(5, 4)).is_ok());
    assert_eq!(board.placed_segments().count(), 4);
}

#[test]
fn test_with_wall_restores_on_every_path() {
    let mut board = Board::build(9).unwrap();
    let wall = Wall::between(c(6, 1), c(6, 3)).unwrap();

    let placed_inside = board.with_wall(wall, |b| b.walls().len()).unwrap();
    assert_eq!(placed_inside, 1);
    assert!(board.walls().is_empty());

    board.place(wall).unwrap();
    assert_eq!(board.with_wall(wall, |_| ()), Err(WallFault::Occupied));
    assert_eq!(board.walls(), &[wall]);
}

#[test]
fn test_reset_keeps_topology() {
    let mut board = Board::build(9).unwrap();
    let before: Vec<_> = board.cells().map(|cell| cell.sides()).collect();
    board.place_wall(c(2, 2), c(3, 2), c(4, 2)).unwrap();
    board.reset();
    let after: Vec<_> = board.cells().map(|cell| cell.sides()).collect();
    assert_eq!(before, after);
    assert_eq!(board.neighbor(CellAddress::new(2, 1), Direction::Right), Ok(Some(CellAddress::new(2, 2))));
}
