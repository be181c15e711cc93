//! Host-facing call surface over many independent matches.
//!
//! The [`Engine`] owns every hosted [`Match`] keyed by [`MatchId`] and
//! exposes the request/response calls a presentation or session layer needs.
//! Matches share no state, so a host may shard them across workers; calls on
//! one match must be serialized, which `&mut Engine` enforces in-process.
//!
//! ## Example
//!
//! ```
//! use quoridor_engine::core::{CellAddress, MatchConfig, ParticipantId, Seat};
//! use quoridor_engine::engine::Engine;
//! use quoridor_engine::game::Role;
//!
//! let mut engine = Engine::new();
//! let id = engine.create_match(MatchConfig::default()).unwrap();
//! assert_eq!(engine.join(id, ParticipantId(1), "alice").unwrap(), Role::Player(Seat::First));
//! engine.join(id, ParticipantId(2), "bob").unwrap();
//!
//! let (_, snapshot) = engine.request_move(id, ParticipantId(1), CellAddress::new(1, 4)).unwrap();
//! assert_eq!(snapshot.current, Seat::Second);
//! ```

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::info;

use crate::core::{
    CellAddress, CornerAddress, EngineError, MatchConfig, MatchId, Participant, ParticipantId, Rejection,
};
use crate::events::{ListenerId, MatchEvent};
use crate::game::{Match, MoveOutcome, Role, WallOutcome};
use crate::snapshot::{MatchSnapshot, SnapshotError};

/// A refused turn request.
///
/// Carries the match state as it stands after the refusal, which is the state
/// before the request. `snapshot` is `None` only when the match id is unknown.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct TurnRefusal {
    /// Why the request was refused.
    pub error: EngineError,
    /// State of the match, if it exists.
    pub snapshot: Option<MatchSnapshot>,
}

impl From<Rejection> for TurnRefusal {
    fn from(rejection: Rejection) -> Self {
        Self {
            error: rejection.into(),
            snapshot: None,
        }
    }
}

/// Registry of hosted matches.
#[derive(Debug, Default)]
pub struct Engine {
    matches: FxHashMap<MatchId, Match>,

    /// Next match ID to allocate.
    next_id: u64,
}

impl Engine {
    /// Create an engine hosting no matches.
    pub fn new() -> Self {
        Self::default()
    }

    // === Registry ===

    /// Create a match waiting for players.
    pub fn create_match(&mut self, config: MatchConfig) -> Result<MatchId, Rejection> {
        let id = MatchId::new(self.next_id);
        let game = Match::new(id, config)?;
        self.next_id += 1;
        self.matches.insert(id, game);
        Ok(id)
    }

    /// Host a match rebuilt from a snapshot, keeping its id. Replaces any
    /// match already hosted under that id.
    pub fn restore_match(&mut self, snapshot: MatchSnapshot) -> Result<MatchId, SnapshotError> {
        let game = Match::restore(snapshot)?;
        let id = game.id();
        self.next_id = self.next_id.max(id.raw() + 1);
        if self.matches.insert(id, game).is_some() {
            info!(match_id = %id, "hosted match replaced by restore");
        }
        Ok(id)
    }

    /// Stop hosting a match, handing it back.
    pub fn remove_match(&mut self, id: MatchId) -> Option<Match> {
        let removed = self.matches.remove(&id);
        if removed.is_some() {
            info!(match_id = %id, "match removed");
        }
        removed
    }

    /// A hosted match.
    pub fn get(&self, id: MatchId) -> Result<&Match, Rejection> {
        self.matches.get(&id).ok_or(Rejection::UnknownMatch(id))
    }

    /// A hosted match, mutably.
    pub fn get_mut(&mut self, id: MatchId) -> Result<&mut Match, Rejection> {
        self.matches.get_mut(&id).ok_or(Rejection::UnknownMatch(id))
    }

    /// Ids of hosted matches, ascending.
    #[must_use]
    pub fn match_ids(&self) -> Vec<MatchId> {
        let mut ids: Vec<_> = self.matches.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of hosted matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether no match is hosted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    // === Match calls ===

    /// Seat or register `participant` in match `id`.
    pub fn join(&mut self, id: MatchId, participant: ParticipantId, name: impl Into<String>) -> Result<Role, Rejection> {
        Ok(self.get_mut(id)?.join(Participant::new(participant, name)))
    }

    /// Remove a spectator from match `id`.
    pub fn leave(&mut self, id: MatchId, participant: ParticipantId) -> Result<bool, Rejection> {
        Ok(self.get_mut(id)?.leave(participant))
    }

    /// Destinations for the player to move in match `id`.
    pub fn legal_moves(&self, id: MatchId) -> Result<SmallVec<[CellAddress; 8]>, EngineError> {
        self.get(id)?.legal_moves()
    }

    /// Corners with at least one legal wall completion.
    pub fn legal_wall_anchors(&self, id: MatchId) -> Result<Vec<CornerAddress>, EngineError> {
        self.get(id)?.legal_wall_anchors()
    }

    /// Second corners completing a legal wall from `anchor`.
    pub fn legal_wall_completions(
        &self,
        id: MatchId,
        anchor: CornerAddress,
    ) -> Result<SmallVec<[CornerAddress; 4]>, EngineError> {
        self.get(id)?.legal_wall_completions(anchor)
    }

    /// Move a pawn; returns the outcome and the state after it.
    ///
    /// A refusal carries the unchanged state.
    pub fn request_move(
        &mut self,
        id: MatchId,
        participant: ParticipantId,
        target: CellAddress,
    ) -> Result<(MoveOutcome, MatchSnapshot), TurnRefusal> {
        let game = self.get_mut(id)?;
        match game.request_move(participant, target) {
            Ok(outcome) => Ok((outcome, game.snapshot())),
            Err(error) => Err(TurnRefusal {
                error,
                snapshot: Some(game.snapshot()),
            }),
        }
    }

    /// Place a wall; returns the outcome and the state after it.
    ///
    /// A refusal carries the unchanged state.
    pub fn request_wall_placement(
        &mut self,
        id: MatchId,
        participant: ParticipantId,
        anchor: CornerAddress,
        second: CornerAddress,
    ) -> Result<(WallOutcome, MatchSnapshot), TurnRefusal> {
        let game = self.get_mut(id)?;
        match game.request_wall_placement(participant, anchor, second) {
            Ok(outcome) => Ok((outcome, game.snapshot())),
            Err(error) => Err(TurnRefusal {
                error,
                snapshot: Some(game.snapshot()),
            }),
        }
    }

    /// Full state of match `id`.
    pub fn snapshot(&self, id: MatchId) -> Result<MatchSnapshot, Rejection> {
        Ok(self.get(id)?.snapshot())
    }

    /// Register a listener on match `id`.
    pub fn subscribe(
        &mut self,
        id: MatchId,
        callback: impl FnMut(&MatchEvent) + Send + 'static,
    ) -> Result<ListenerId, Rejection> {
        Ok(self.get_mut(id)?.subscribe(callback))
    }

    /// Drop a listener from match `id`.
    pub fn unsubscribe(&mut self, id: MatchId, listener: ListenerId) -> Result<bool, Rejection> {
        Ok(self.get_mut(id)?.unsubscribe(listener))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Seat;
    use crate::game::MatchPhase;

    #[test]
    fn test_create_allocates_sequential_ids() {
        let mut engine = Engine::new();
        let a = engine.create_match(MatchConfig::default()).unwrap();
        let b = engine.create_match(MatchConfig::default()).unwrap();
        assert_eq!(a.raw() + 1, b.raw());
        assert_eq!(engine.match_ids(), vec![a, b]);
    }

    #[test]
    fn test_create_rejects_bad_config() {
        let mut engine = Engine::new();
        let err = engine.create_match(MatchConfig::new().with_grid_size(1)).unwrap_err();
        assert!(matches!(err, Rejection::InvalidConfiguration(_)));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_unknown_match() {
        let mut engine = Engine::new();
        let ghost = MatchId(42);
        assert_eq!(engine.join(ghost, ParticipantId(1), "a"), Err(Rejection::UnknownMatch(ghost)));
        assert_eq!(
            engine.legal_moves(ghost).unwrap_err(),
            EngineError::Rejected(Rejection::UnknownMatch(ghost))
        );
        assert!(engine.remove_match(ghost).is_none());

        let refusal = engine.request_move(ghost, ParticipantId(1), CellAddress::new(1, 4)).unwrap_err();
        assert_eq!(refusal.error, EngineError::Rejected(Rejection::UnknownMatch(ghost)));
        assert!(refusal.snapshot.is_none());
    }

    #[test]
    fn test_refused_turn_carries_unchanged_state() {
        let mut engine = Engine::new();
        let id = engine.create_match(MatchConfig::default()).unwrap();
        engine.join(id, ParticipantId(1), "alice").unwrap();
        engine.join(id, ParticipantId(2), "bob").unwrap();
        let before = engine.snapshot(id).unwrap();

        let refusal = engine.request_move(id, ParticipantId(2), CellAddress::new(7, 4)).unwrap_err();
        assert_eq!(
            refusal.error,
            EngineError::Rejected(Rejection::InvalidParticipant(ParticipantId(2)))
        );
        assert_eq!(refusal.snapshot.as_ref(), Some(&before));

        let refusal = engine
            .request_wall_placement(id, ParticipantId(1), CornerAddress::new(4, 4), CornerAddress::new(4, 5))
            .unwrap_err();
        assert!(matches!(refusal.error, EngineError::Rejected(Rejection::IllegalWallPlacement(_))));
        assert_eq!(refusal.snapshot, Some(before));
    }

    #[test]
    fn test_matches_are_independent() {
        let mut engine = Engine::new();
        let a = engine.create_match(MatchConfig::default()).unwrap();
        let b = engine.create_match(MatchConfig::default()).unwrap();
        for id in [a, b] {
            engine.join(id, ParticipantId(1), "alice").unwrap();
            engine.join(id, ParticipantId(2), "bob").unwrap();
        }
        engine.request_move(a, ParticipantId(1), CellAddress::new(1, 4)).unwrap();

        assert_eq!(engine.snapshot(a).unwrap().current, Seat::Second);
        assert_eq!(engine.snapshot(b).unwrap().current, Seat::First);
        assert_eq!(engine.get(b).unwrap().phase(), MatchPhase::InProgress);
    }

    #[test]
    fn test_restore_match_bumps_next_id() {
        let mut source = Engine::new();
        for _ in 0..3 {
            source.create_match(MatchConfig::default()).unwrap();
        }
        let snap = source.snapshot(MatchId(2)).unwrap();

        let mut engine = Engine::new();
        assert_eq!(engine.restore_match(snap).unwrap(), MatchId(2));
        assert_eq!(engine.create_match(MatchConfig::default()).unwrap(), MatchId(3));
    }
}
