//! The board: cells, unit segments and committed walls.
//!
//! Topology lives in two flat arenas built once by [`Board::build`]:
//!
//! - `cells[row * N + col]`
//! - `segments`: `N * (N + 1)` horizontal segments (indexed `x * N + y`)
//!   followed by `N * (N + 1)` vertical segments (indexed `x * (N + 1) + y`).
//!
//! Coordinate to index is a pure function, so lookups are bounds-checked O(1)
//! with no hashing. After construction only the `placed` flags and the list of
//! committed walls change.

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::cell::Cell;
use super::segment::{SegmentId, WallSegment};
use super::wall::Wall;
use crate::core::{
    CellAddress, CornerAddress, Direction, InvariantViolation, Orientation, Rejection, Seat,
    WallFault, MAX_GRID_SIZE,
};

/// Slot of the horizontal segment starting at corner `(x, y)`.
const fn h_slot(n: u8, x: u8, y: u8) -> usize {
    x as usize * n as usize + y as usize
}

/// Slot of the vertical segment starting at corner `(x, y)`.
const fn v_slot(n: u8, x: u8, y: u8) -> usize {
    let horizontal = (n as usize + 1) * n as usize;
    horizontal + x as usize * (n as usize + 1) + y as usize
}

/// Slot of the segment joining `a` and `b`, if both are on the lattice and
/// lattice-adjacent.
fn segment_slot(n: u8, a: CornerAddress, b: CornerAddress) -> Option<usize> {
    if !a.is_within(n) || !b.is_within(n) {
        return None;
    }
    let lo = a.min(b);
    match a.adjacency(b)? {
        Orientation::Horizontal => Some(h_slot(n, lo.x(), lo.y())),
        Orientation::Vertical => Some(v_slot(n, lo.x(), lo.y())),
    }
}

/// Square game board. The single source of truth for wall state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
    segments: Vec<WallSegment>,
    /// Committed walls in placement order.
    walls: Vec<Wall>,
}

impl Board {
    /// Generate the full topology for an `size x size` grid.
    ///
    /// Deterministic: the same size always yields the same arenas.
    pub fn build(size: u8) -> Result<Self, Rejection> {
        if size == 0 {
            return Err(Rejection::InvalidConfiguration("grid size must be positive"));
        }
        if size > MAX_GRID_SIZE {
            return Err(Rejection::InvalidConfiguration("grid size exceeds coordinate range"));
        }
        let n = size;

        let mut segments = Vec::with_capacity(2 * n as usize * (n as usize + 1));
        for x in 0..=n {
            for y in 0..n {
                let id = SegmentId(segments.len() as u32);
                let above = (x > 0).then(|| CellAddress::new(x - 1, y));
                let below = (x < n).then(|| CellAddress::new(x, y));
                segments.push(WallSegment::new(
                    id,
                    CornerAddress::new(x, y),
                    CornerAddress::new(x, y + 1),
                    Orientation::Horizontal,
                    [above, below],
                ));
            }
        }
        for x in 0..n {
            for y in 0..=n {
                let id = SegmentId(segments.len() as u32);
                let left = (y > 0).then(|| CellAddress::new(x, y - 1));
                let right = (y < n).then(|| CellAddress::new(x, y));
                segments.push(WallSegment::new(
                    id,
                    CornerAddress::new(x, y),
                    CornerAddress::new(x + 1, y),
                    Orientation::Vertical,
                    [left, right],
                ));
            }
        }

        let mut cells = Vec::with_capacity(n as usize * n as usize);
        for row in 0..n {
            for col in 0..n {
                let sides = [
                    SegmentId(h_slot(n, row, col) as u32),
                    SegmentId(v_slot(n, row, col + 1) as u32),
                    SegmentId(h_slot(n, row + 1, col) as u32),
                    SegmentId(v_slot(n, row, col) as u32),
                ];
                let mut owners = SmallVec::new();
                for seat in Seat::ALL {
                    if row == seat.goal_row(n) {
                        owners.push(seat);
                    }
                }
                cells.push(Cell::new(CellAddress::new(row, col), sides, owners));
            }
        }

        debug!(size, cells = cells.len(), segments = segments.len(), "board built");

        Ok(Self {
            size,
            cells,
            segments,
            walls: Vec::new(),
        })
    }

    /// Cells per side (N).
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of rows (N).
    #[must_use]
    pub fn row_size(&self) -> u8 {
        self.size
    }

    /// Number of columns (N).
    #[must_use]
    pub fn column_size(&self) -> u8 {
        self.size
    }

    // === Lookups ===

    /// The cell at `address`, or `None` off the board.
    #[must_use]
    pub fn cell(&self, address: CellAddress) -> Option<&Cell> {
        if !address.is_within(self.size) {
            return None;
        }
        self.cells.get(address.index(self.size))
    }

    /// The cell at `address`, which the caller knows must exist.
    pub fn expect_cell(&self, address: CellAddress) -> Result<&Cell, InvariantViolation> {
        self.cell(address).ok_or(InvariantViolation::MissingCell(address))
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// All unit segments.
    #[must_use]
    pub fn segments(&self) -> &[WallSegment] {
        &self.segments
    }

    /// Segment joining two lattice-adjacent corners, in either order.
    ///
    /// `None` if the corners are off the lattice or not adjacent.
    #[must_use]
    pub fn segment(&self, a: CornerAddress, b: CornerAddress) -> Option<&WallSegment> {
        segment_slot(self.size, a, b).and_then(|slot| self.segments.get(slot))
    }

    /// Segment by arena index.
    #[must_use]
    pub fn segment_by_id(&self, id: SegmentId) -> Option<&WallSegment> {
        self.segments.get(id.slot())
    }

    /// Segment bounding `cell` on the side facing `dir`.
    pub fn side(&self, cell: CellAddress, dir: Direction) -> Result<&WallSegment, InvariantViolation> {
        let id = self.expect_cell(cell)?.side(dir);
        self.segment_by_id(id).ok_or_else(|| {
            let (a, b) = cell.side_corners(dir);
            InvariantViolation::MissingSegment(a, b)
        })
    }

    /// Cell reachable from `cell` by one step in `dir`: on the board and not
    /// behind a placed segment.
    pub fn neighbor(&self, cell: CellAddress, dir: Direction) -> Result<Option<CellAddress>, InvariantViolation> {
        if self.side(cell, dir)?.is_placed() {
            return Ok(None);
        }
        Ok(cell.step(dir, self.size))
    }

    /// All lattice corners, row-major.
    pub fn corners(&self) -> impl Iterator<Item = CornerAddress> {
        CornerAddress::all(self.size)
    }

    /// Committed walls, in placement order.
    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Segments currently covered by a wall.
    pub fn placed_segments(&self) -> impl Iterator<Item = &WallSegment> {
        self.segments.iter().filter(|s| s.is_placed())
    }

    // === Wall placement ===

    fn wall_slots(&self, wall: &Wall) -> Result<[usize; 2], WallFault> {
        if !wall.is_within(self.size) {
            return Err(WallFault::OutOfBounds);
        }
        let [(a, b), (c, d)] = wall.segments();
        let slots = [
            segment_slot(self.size, a, b).ok_or(WallFault::OutOfBounds)?,
            segment_slot(self.size, c, d).ok_or(WallFault::OutOfBounds)?,
        ];
        Ok(slots)
    }

    /// Check geometry and occupancy for `wall` without mutating, returning
    /// the two segments it would cover.
    ///
    /// Does not run the path-blocking check; see [`crate::rules`].
    pub fn check_wall(&self, wall: &Wall) -> Result<[SegmentId; 2], WallFault> {
        let slots = self.wall_slots(wall)?;
        if slots.iter().any(|&s| self.segments[s].is_placed()) {
            return Err(WallFault::Occupied);
        }
        Ok(slots.map(|s| self.segments[s].id()))
    }

    /// Commit `wall`: both segments flip to placed, or neither does.
    pub fn place(&mut self, wall: Wall) -> Result<(), WallFault> {
        for id in self.check_wall(&wall)? {
            self.segments[id.slot()].set_placed(true);
        }
        self.walls.push(wall);
        trace!(%wall, "wall placed");
        Ok(())
    }

    /// Commit the wall through three consecutive collinear corners.
    pub fn place_wall(&mut self, a: CornerAddress, b: CornerAddress, c: CornerAddress) -> Result<Wall, WallFault> {
        if ![a, b, c].iter().all(|corner| corner.is_within(self.size)) {
            return Err(WallFault::OutOfBounds);
        }
        let wall = Wall::through(a, b, c)?;
        self.place(wall)?;
        Ok(wall)
    }

    /// Lift a committed wall. Returns `false` if `wall` was not placed.
    pub fn remove(&mut self, wall: &Wall) -> bool {
        let Some(pos) = self.walls.iter().rposition(|w| w == wall) else {
            return false;
        };
        self.walls.remove(pos);
        if let Ok(slots) = self.wall_slots(wall) {
            for slot in slots {
                self.segments[slot].set_placed(false);
            }
        }
        trace!(%wall, "wall removed");
        true
    }

    /// Lift the wall through three corners. Inverse of [`Board::place_wall`].
    pub fn remove_wall(&mut self, a: CornerAddress, b: CornerAddress, c: CornerAddress) -> Result<bool, WallFault> {
        let wall = Wall::through(a, b, c)?;
        Ok(self.remove(&wall))
    }

    /// Place `wall`, run `probe` against the resulting board, then lift the
    /// wall again whatever `probe` returned.
    ///
    /// The exclusive borrow keeps any other mutation out of the window.
    pub fn with_wall<R>(&mut self, wall: Wall, probe: impl FnOnce(&Board) -> R) -> Result<R, WallFault> {
        self.place(wall)?;
        let out = probe(self);
        self.remove(&wall);
        Ok(out)
    }

    /// Clear every wall. Topology is untouched.
    pub fn reset(&mut self) {
        for segment in &mut self.segments {
            segment.set_placed(false);
        }
        self.walls.clear();
        debug!(size = self.size, "board reset");
    }
}
