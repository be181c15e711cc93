//! Playable squares.

use smallvec::SmallVec;

use super::segment::SegmentId;
use crate::core::{CellAddress, Direction, Seat};

/// A playable square and the four segments bounding it.
///
/// Neighbouring cells share the segment between them: the `Right` side of
/// `(r, c)` is the `Left` side of `(r, c + 1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    address: CellAddress,
    /// Indexed by [`Direction::index`].
    sides: [SegmentId; 4],
    /// Seats that win by reaching this cell.
    victory_owners: SmallVec<[Seat; 2]>,
}

impl Cell {
    pub(crate) fn new(address: CellAddress, sides: [SegmentId; 4], victory_owners: SmallVec<[Seat; 2]>) -> Self {
        Self {
            address,
            sides,
            victory_owners,
        }
    }

    /// Address of this cell.
    #[must_use]
    pub fn address(&self) -> CellAddress {
        self.address
    }

    /// Segment on the side facing `dir`.
    #[must_use]
    pub fn side(&self, dir: Direction) -> SegmentId {
        self.sides[dir.index()]
    }

    /// `[top, right, bottom, left]` segments.
    #[must_use]
    pub fn sides(&self) -> [SegmentId; 4] {
        self.sides
    }

    /// Seats for which this is a victory cell. Empty away from the home rows.
    #[must_use]
    pub fn victory_owners(&self) -> &[Seat] {
        &self.victory_owners
    }

    /// Whether reaching this cell wins for `seat`.
    #[must_use]
    pub fn is_victory_for(&self, seat: Seat) -> bool {
        self.victory_owners.contains(&seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_cell_sides_and_victory() {
        let cell = Cell::new(
            CellAddress::new(8, 2),
            [SegmentId(1), SegmentId(2), SegmentId(3), SegmentId(4)],
            smallvec![Seat::First],
        );

        assert_eq!(cell.address(), CellAddress::new(8, 2));
        assert_eq!(cell.side(Direction::Up), SegmentId(1));
        assert_eq!(cell.side(Direction::Right), SegmentId(2));
        assert_eq!(cell.side(Direction::Down), SegmentId(3));
        assert_eq!(cell.side(Direction::Left), SegmentId(4));
        assert!(cell.is_victory_for(Seat::First));
        assert!(!cell.is_victory_for(Seat::Second));
    }

    #[test]
    fn test_interior_cell_has_no_owners() {
        let cell = Cell::new(CellAddress::new(4, 4), [SegmentId(0); 4], SmallVec::new());
        assert!(cell.victory_owners().is_empty());
    }
}
