//! Player-placed walls: two consecutive collinear segments.

use serde::{Deserialize, Serialize};

use crate::core::{CornerAddress, Orientation, WallFault};

/// A wall anchored at three consecutive corners along one grid line.
///
/// Stored in normal form (`start` is the smaller end corner) so the same wall
/// compares equal however its endpoints were selected.
///
/// ```
/// use quoridor_engine::board::Wall;
/// use quoridor_engine::core::{CornerAddress, Orientation};
///
/// let a = Wall::between(CornerAddress::new(3, 6), CornerAddress::new(3, 4)).unwrap();
/// let b = Wall::between(CornerAddress::new(3, 4), CornerAddress::new(3, 6)).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.orientation(), Orientation::Horizontal);
/// assert_eq!(a.middle(), CornerAddress::new(3, 5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Wall {
    start: CornerAddress,
    orientation: Orientation,
}

impl Wall {
    /// Wall spanning from `anchor` to `end`, which must be exactly two
    /// lattice units apart along a single axis.
    pub fn between(anchor: CornerAddress, end: CornerAddress) -> Result<Self, WallFault> {
        let dx = anchor.x().abs_diff(end.x());
        let dy = anchor.y().abs_diff(end.y());
        let orientation = match (dx, dy) {
            (0, 2) => Orientation::Horizontal,
            (2, 0) => Orientation::Vertical,
            (0, _) | (_, 0) => return Err(WallFault::NotAdjacent),
            _ => return Err(WallFault::NotCollinear),
        };
        Ok(Self {
            start: anchor.min(end),
            orientation,
        })
    }

    /// Wall through three corners `a`-`b`-`c`, given in either direction.
    pub fn through(a: CornerAddress, b: CornerAddress, c: CornerAddress) -> Result<Self, WallFault> {
        let first = a.adjacency(b).ok_or(WallFault::NotAdjacent)?;
        let second = b.adjacency(c).ok_or(WallFault::NotAdjacent)?;
        if first != second {
            return Err(WallFault::NotCollinear);
        }
        if a == c {
            return Err(WallFault::NotAdjacent);
        }
        Self::between(a, c)
    }

    /// Axis of the wall.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Smaller end corner.
    #[must_use]
    pub fn start(&self) -> CornerAddress {
        self.start
    }

    /// Centre corner.
    #[must_use]
    pub fn middle(&self) -> CornerAddress {
        self.along(1)
    }

    /// Larger end corner.
    #[must_use]
    pub fn end(&self) -> CornerAddress {
        self.along(2)
    }

    /// Whether all three corners lie on the lattice of a `size x size` grid.
    #[must_use]
    pub fn is_within(&self, size: u8) -> bool {
        let (x, y) = (u16::from(self.start.x()), u16::from(self.start.y()));
        let (ex, ey) = match self.orientation {
            Orientation::Horizontal => (x, y + 2),
            Orientation::Vertical => (x + 2, y),
        };
        ex <= u16::from(size) && ey <= u16::from(size)
    }

    /// `[start, middle, end]`.
    #[must_use]
    pub fn corners(&self) -> [CornerAddress; 3] {
        [self.start, self.middle(), self.end()]
    }

    /// Endpoint pairs of the two unit segments, in order.
    #[must_use]
    pub fn segments(&self) -> [(CornerAddress, CornerAddress); 2] {
        let [s, m, e] = self.corners();
        [(s, m), (m, e)]
    }

    fn along(&self, step: u8) -> CornerAddress {
        match self.orientation {
            Orientation::Horizontal => CornerAddress::new(self.start.x(), self.start.y().saturating_add(step)),
            Orientation::Vertical => CornerAddress::new(self.start.x().saturating_add(step), self.start.y()),
        }
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end())
    }
}
