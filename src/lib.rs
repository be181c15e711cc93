//! # quoridor-engine
//!
//! Rules engine for two-player Quoridor on a configurable square grid.
//!
//! ## Design Principles
//!
//! 1. **Board is the single source of truth**: cells and wall segments live in
//!    flat arenas indexed by pure coordinate functions. Only `placed` flags
//!    change during play.
//!
//! 2. **Reject, never half-apply**: every request is validated in full before
//!    anything mutates. Refusals are [`Rejection`]s; internal inconsistencies
//!    are a separate [`InvariantViolation`].
//!
//! 3. **Downward ownership**: the match owns the board and players; change
//!    notifications are registered callbacks, not back-references.
//!
//! ## Modules
//!
//! - `core`: Coordinates, seats, players, configuration, actions, errors
//! - `board`: Cells, unit segments, walls and the board arena
//! - `rules`: Blocking check, move legality, wall legality
//! - `events`: Match events and the listener registry
//! - `game`: The match state machine
//! - `snapshot`: Serializable match state and validated restore
//! - `engine`: Call surface over many matches keyed by id

pub mod core;
pub mod board;
pub mod rules;
pub mod events;
pub mod game;
pub mod snapshot;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    CellAddress, CornerAddress, Direction, Orientation,
    MatchId, ParticipantId,
    Color, Participant, Player, Seat, SeatMap,
    MatchConfig,
    Action, ActionRecord,
    EngineError, InvariantViolation, RejectCode, Rejection, WallFault,
};

pub use crate::board::{Board, Cell, SegmentId, Wall, WallSegment};

pub use crate::events::{EventKind, Listener, ListenerId, ListenerRegistry, MatchEvent};

pub use crate::game::{Match, MatchPhase, MoveOutcome, Role, VictoryRecord, WallOutcome};

pub use crate::snapshot::{MatchSnapshot, SnapshotError};

pub use crate::engine::{Engine, TurnRefusal};
