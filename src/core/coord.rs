//! Addressing spaces for the board.
//!
//! ## CellAddress
//!
//! `(row, col)` of a playable square, `0 <= row, col < N`. Row 0 is player 1's
//! home row.
//!
//! ## CornerAddress
//!
//! `(x, y)` of a lattice point, `0 <= x, y <= N`. `x` is the horizontal grid
//! line (between rows `x - 1` and `x`), `y` the vertical grid line (between
//! columns `y - 1` and `y`). The top-left corner of cell `(r, c)` is `(r, c)`.
//!
//! Both are small `Copy` values. Neighbours are derived by pure functions that
//! return new values; nothing here knows about walls.

use serde::{Deserialize, Serialize};

/// One of the four orthogonal directions on the cell grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards column N-1.
    Right,
    /// Towards row N-1.
    Down,
    /// Towards column 0.
    Left,
}

impl Direction {
    /// All directions, in a fixed order (clockwise from `Up`).
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(d_row, d_col)` for one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// The reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// The two directions at right angles to this one.
    #[must_use]
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Axis a wall segment runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    /// Runs along a horizontal grid line; separates a cell from the one below.
    Horizontal,
    /// Runs along a vertical grid line; separates a cell from the one to its right.
    Vertical,
}

/// Address of a playable square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellAddress {
    row: u8,
    col: u8,
}

impl CellAddress {
    /// Create a cell address. Bounds are checked by the board, not here.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row (0 = player 1's home row).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Whether this address lies on an `size x size` grid.
    #[must_use]
    pub const fn is_within(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Flat arena index (`row * size + col`).
    #[must_use]
    pub const fn index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    /// Inverse of [`CellAddress::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: u8) -> Self {
        let n = size as usize;
        Self::new((index / n) as u8, (index % n) as u8)
    }

    /// The neighbouring cell in `dir`, if it lies on the grid.
    #[must_use]
    pub fn step(self, dir: Direction, size: u8) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = self.row as i16 + dr;
        let col = self.col as i16 + dc;
        let n = size as i16;
        if (0..n).contains(&row) && (0..n).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// The two corners bounding the side of this cell that faces `dir`.
    ///
    /// Ordered so the first corner has the smaller coordinates.
    #[must_use]
    pub const fn side_corners(self, dir: Direction) -> (CornerAddress, CornerAddress) {
        let (r, c) = (self.row, self.col);
        match dir {
            Direction::Up => (CornerAddress::new(r, c), CornerAddress::new(r, c + 1)),
            Direction::Down => (CornerAddress::new(r + 1, c), CornerAddress::new(r + 1, c + 1)),
            Direction::Left => (CornerAddress::new(r, c), CornerAddress::new(r + 1, c)),
            Direction::Right => (CornerAddress::new(r, c + 1), CornerAddress::new(r + 1, c + 1)),
        }
    }
}

impl std::fmt::Display for CellAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Address of a lattice point where wall endpoints attach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CornerAddress {
    x: u8,
    y: u8,
}

impl CornerAddress {
    /// Create a corner address. Bounds are checked by the board, not here.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Horizontal grid line index.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Vertical grid line index.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Whether this corner lies on the lattice of a `size x size` grid.
    #[must_use]
    pub const fn is_within(self, size: u8) -> bool {
        self.x <= size && self.y <= size
    }

    /// Flat arena index (`x * (size + 1) + y`).
    #[must_use]
    pub const fn index(self, size: u8) -> usize {
        self.x as usize * (size as usize + 1) + self.y as usize
    }

    /// The corner `(dx, dy)` away, if it lies on the lattice.
    #[must_use]
    pub fn offset(self, dx: i16, dy: i16, size: u8) -> Option<Self> {
        let x = self.x as i16 + dx;
        let y = self.y as i16 + dy;
        let n = size as i16;
        if (0..=n).contains(&x) && (0..=n).contains(&y) {
            Some(Self::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Orientation of the unit segment joining `self` and `other`, if the two
    /// are lattice-adjacent (differ by exactly 1 along exactly one axis).
    #[must_use]
    pub fn adjacency(self, other: Self) -> Option<Orientation> {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        match (dx, dy) {
            (0, 1) => Some(Orientation::Horizontal),
            (1, 0) => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// All corners of the lattice for a `size x size` grid, row-major.
    pub fn all(size: u8) -> impl Iterator<Item = CornerAddress> {
        (0..=size).flat_map(move |x| (0..=size).map(move |y| CornerAddress::new(x, y)))
    }
}

impl std::fmt::Display for CornerAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite_and_perpendicular() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
            for side in dir.perpendicular() {
                assert_ne!(side, dir);
                assert_ne!(side, dir.opposite());
            }
        }
    }

    #[test]
    fn test_cell_step_inside_and_outside() {
        let c = CellAddress::new(0, 0);
        assert_eq!(c.step(Direction::Up, 9), None);
        assert_eq!(c.step(Direction::Left, 9), None);
        assert_eq!(c.step(Direction::Down, 9), Some(CellAddress::new(1, 0)));
        assert_eq!(c.step(Direction::Right, 9), Some(CellAddress::new(0, 1)));

        let far = CellAddress::new(8, 8);
        assert_eq!(far.step(Direction::Down, 9), None);
        assert_eq!(far.step(Direction::Right, 9), None);
    }

    #[test]
    fn test_cell_index_roundtrip() {
        for row in 0..9 {
            for col in 0..9 {
                let c = CellAddress::new(row, col);
                assert_eq!(CellAddress::from_index(c.index(9), 9), c);
            }
        }
        assert_eq!(CellAddress::new(4, 4).index(9), 40);
    }

    #[test]
    fn test_side_corners_are_adjacent() {
        let c = CellAddress::new(3, 5);
        for dir in Direction::ALL {
            let (a, b) = c.side_corners(dir);
            assert!(a < b);
            let expected = match dir {
                Direction::Up | Direction::Down => Orientation::Horizontal,
                Direction::Left | Direction::Right => Orientation::Vertical,
            };
            assert_eq!(a.adjacency(b), Some(expected));
        }
    }

    #[test]
    fn test_corner_adjacency() {
        let a = CornerAddress::new(2, 2);
        assert_eq!(a.adjacency(CornerAddress::new(2, 3)), Some(Orientation::Horizontal));
        assert_eq!(a.adjacency(CornerAddress::new(1, 2)), Some(Orientation::Vertical));
        assert_eq!(a.adjacency(CornerAddress::new(3, 3)), None);
        assert_eq!(a.adjacency(CornerAddress::new(2, 4)), None);
        assert_eq!(a.adjacency(a), None);
    }

    #[test]
    fn test_corner_offset_bounds() {
        let a = CornerAddress::new(0, 9);
        assert_eq!(a.offset(-1, 0, 9), None);
        assert_eq!(a.offset(0, 1, 9), None);
        assert_eq!(a.offset(2, -2, 9), Some(CornerAddress::new(2, 7)));
    }

    #[test]
    fn test_corner_all_count() {
        assert_eq!(CornerAddress::all(9).count(), 100);
        assert_eq!(CornerAddress::all(3).last(), Some(CornerAddress::new(3, 3)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CellAddress::new(4, 2)), "(4, 2)");
        assert_eq!(format!("{}", CornerAddress::new(1, 7)), "<1, 7>");
    }
}
