//! Board topology and wall state.
//!
//! ## Key Types
//!
//! - [`Board`]: arena of cells and unit segments, plus the committed walls
//! - [`Cell`]: a playable square and its four bounding segments
//! - [`WallSegment`]: unit edge between two lattice-adjacent corners
//! - [`Wall`]: two consecutive collinear segments placed by a player
//!
//! Topology is generated once by [`Board::build`] and never changes; only the
//! `placed` flag of each segment mutates during play.

mod cell;
mod grid;
mod segment;
mod wall;

pub use cell::Cell;
pub use grid::Board;
pub use segment::{SegmentId, WallSegment};
pub use wall::Wall;
