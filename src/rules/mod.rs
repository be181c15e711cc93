//! Rules of Quoridor: reachability, pawn moves and wall legality.
//!
//! Everything here is a pure function of a [`Board`](crate::board::Board)
//! and the two [`Player`](crate::core::Player)s. Results are recomputed on
//! every query; nothing is cached across turns.
//!
//! ## Key Functions
//!
//! - [`is_player_blocked`] / [`distance_to_goal`]: breadth-first search from a
//!   pawn to its goal row
//! - [`legal_moves`]: orthogonal steps plus straight and diagonal jumps
//! - [`check_wall_placement`]: geometry, occupancy and the blocking check
//! - [`legal_second_corners`] / [`legal_anchors`]: wall-selection affordances
//!
//! ## Blocking check
//!
//! A candidate wall is evaluated by searching the board as if its two
//! segments were placed. The board itself is never touched, so a query
//! cannot leave partial state behind and needs only a shared borrow.

mod moves;
mod path;
mod walls;

pub use moves::legal_moves;
pub use path::{distance_to_goal, is_player_blocked};
pub use walls::{check_wall_placement, legal_anchors, legal_second_corners};
