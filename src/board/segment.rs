//! Unit wall segments: the smallest blockable unit.

use serde::{Deserialize, Serialize};

use crate::core::{CellAddress, CornerAddress, Orientation};

/// Arena index of a segment inside its [`Board`](super::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentId(pub(crate) u32);

impl SegmentId {
    /// Get the raw arena index.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

/// Edge between two lattice-adjacent corners.
///
/// `from` is always the smaller corner, so a segment is identified by its
/// endpoint pair regardless of traversal order. Topology (`from`, `to`,
/// bordered cells) is fixed at construction; only `placed` changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WallSegment {
    id: SegmentId,
    from: CornerAddress,
    to: CornerAddress,
    orientation: Orientation,
    placed: bool,
    /// `[above, below]` for horizontal segments, `[left, right]` for vertical.
    cells: [Option<CellAddress>; 2],
}

impl WallSegment {
    pub(crate) fn new(
        id: SegmentId,
        from: CornerAddress,
        to: CornerAddress,
        orientation: Orientation,
        cells: [Option<CellAddress>; 2],
    ) -> Self {
        debug_assert!(from < to);
        Self {
            id,
            from,
            to,
            orientation,
            placed: false,
            cells,
        }
    }

    /// Arena index.
    #[must_use]
    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// Smaller endpoint.
    #[must_use]
    pub fn from(&self) -> CornerAddress {
        self.from
    }

    /// Larger endpoint.
    #[must_use]
    pub fn to(&self) -> CornerAddress {
        self.to
    }

    /// Axis of the segment.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether a wall currently covers this segment.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Cell above (horizontal) or to the left (vertical), if on the board.
    #[must_use]
    pub fn before(&self) -> Option<CellAddress> {
        self.cells[0]
    }

    /// Cell below (horizontal) or to the right (vertical), if on the board.
    #[must_use]
    pub fn after(&self) -> Option<CellAddress> {
        self.cells[1]
    }

    /// The one or two cells this segment separates.
    pub fn cells(&self) -> impl Iterator<Item = CellAddress> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Whether `cell` is bounded by this segment.
    #[must_use]
    pub fn borders(&self, cell: CellAddress) -> bool {
        self.cells.contains(&Some(cell))
    }

    /// On the outer edge of the board (borders a single cell).
    #[must_use]
    pub fn is_perimeter(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    pub(crate) fn set_placed(&mut self, placed: bool) {
        self.placed = placed;
    }
}
