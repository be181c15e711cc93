//! The match state machine.
//!
//! A [`Match`] owns the board and both players, validates every request
//! against [`crate::rules`], commits accepted turns and emits
//! [`MatchEvent`](crate::events::MatchEvent)s to its listeners.
//!
//! ## Lifecycle
//!
//! ```text
//! WaitingForPlayers --(second seat filled)--> InProgress
//! InProgress --(pawn reaches goal row)--> Finished --(reset)--> InProgress
//! ```
//!
//! Identity, participants and the victory log survive resets; walls, pawn
//! positions, inventories and the action history do not.

mod outcome;
mod phase;
mod state;

pub use outcome::{MoveOutcome, VictoryRecord, WallOutcome};
pub use phase::{MatchPhase, Role};
pub use state::Match;
pub(crate) use state::MatchParts;
