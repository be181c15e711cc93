//! Core value types: coordinates, seats, players, configuration, actions,
//! errors.
//!
//! Everything here is plain data. Board topology lives in [`crate::board`],
//! rules in [`crate::rules`], and the mutable match in [`crate::game`].

pub mod coord;
pub mod id;
pub mod player;
pub mod config;
pub mod action;
pub mod error;

pub use coord::{CellAddress, CornerAddress, Direction, Orientation};
pub use id::{MatchId, ParticipantId};
pub use player::{Color, Participant, Player, Seat, SeatMap};
pub use config::{MatchConfig, DEFAULT_GRID_SIZE, DEFAULT_WALLS_PER_PLAYER, MAX_GRID_SIZE};
pub use action::{Action, ActionRecord};
pub use error::{EngineError, InvariantViolation, RejectCode, Rejection, WallFault};
