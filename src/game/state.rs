//! Match state and turn handling.

use chrono::Utc;
use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use super::outcome::{MoveOutcome, VictoryRecord, WallOutcome};
use super::phase::{MatchPhase, Role};
use crate::board::{Board, Wall};
use crate::core::{
    Action, ActionRecord, CellAddress, CornerAddress, EngineError, InvariantViolation, MatchConfig,
    MatchId, Participant, ParticipantId, Player, Rejection, Seat, SeatMap, WallFault,
};
use crate::events::{EventKind, ListenerId, ListenerRegistry, MatchEvent};
use crate::rules;

/// A single Quoridor match: two seats, spectators, the board and the
/// victory log.
///
/// Requests are validated before anything is touched; a rejected request
/// leaves the match exactly as it was. Hosts must serialize mutating calls
/// per match (the `&mut self` receivers enforce this within one process).
#[derive(Debug)]
pub struct Match {
    id: MatchId,
    config: MatchConfig,
    board: Board,
    players: SeatMap<Option<Player>>,
    spectators: FxHashMap<ParticipantId, Participant>,
    current: Seat,
    phase: MatchPhase,
    victories: Vector<VictoryRecord>,
    history: Vector<ActionRecord>,
    turn: u32,
    listeners: ListenerRegistry,
}

/// Validated parts of a match, as rebuilt from a snapshot.
pub(crate) struct MatchParts {
    pub id: MatchId,
    pub config: MatchConfig,
    pub board: Board,
    pub players: SeatMap<Option<Player>>,
    pub spectators: FxHashMap<ParticipantId, Participant>,
    pub current: Seat,
    pub phase: MatchPhase,
    pub victories: Vector<VictoryRecord>,
    pub history: Vector<ActionRecord>,
    pub turn: u32,
}

impl Match {
    /// Create an empty match waiting for two players.
    pub fn new(id: MatchId, config: MatchConfig) -> Result<Self, Rejection> {
        config.validate()?;
        let board = Board::build(config.grid_size)?;
        info!(match_id = %id, grid_size = config.grid_size, walls = config.walls_per_player, "match created");
        Ok(Self {
            id,
            config,
            board,
            players: SeatMap::default(),
            spectators: FxHashMap::default(),
            current: Seat::First,
            phase: MatchPhase::WaitingForPlayers,
            victories: Vector::new(),
            history: Vector::new(),
            turn: 0,
            listeners: ListenerRegistry::new(),
        })
    }

    pub(crate) fn from_parts(parts: MatchParts) -> Self {
        Self {
            id: parts.id,
            config: parts.config,
            board: parts.board,
            players: parts.players,
            spectators: parts.spectators,
            current: parts.current,
            phase: parts.phase,
            victories: parts.victories,
            history: parts.history,
            turn: parts.turn,
            listeners: ListenerRegistry::new(),
        }
    }

    // === Accessors ===

    /// Match identity.
    #[must_use]
    pub fn id(&self) -> MatchId {
        self.id
    }

    /// Configuration the match was created with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Seat to move.
    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Player to move, once seated.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players[self.current].as_ref()
    }

    /// Player in `seat`, if filled.
    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players[seat].as_ref()
    }

    /// Both seats.
    #[must_use]
    pub fn players(&self) -> &SeatMap<Option<Player>> {
        &self.players
    }

    /// Spectators, in no particular order.
    pub fn spectators(&self) -> impl Iterator<Item = &Participant> {
        self.spectators.values()
    }

    /// Every victory since the match was created, oldest first.
    #[must_use]
    pub fn victories(&self) -> &Vector<VictoryRecord> {
        &self.victories
    }

    /// Committed actions of the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Turns taken in the current game.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Role of `participant`, if they have joined.
    #[must_use]
    pub fn role_of(&self, participant: ParticipantId) -> Option<Role> {
        if let Some(seat) = self.seat_of(participant) {
            return Some(Role::Player(seat));
        }
        self.spectators.contains_key(&participant).then_some(Role::Spectator)
    }

    fn seat_of(&self, participant: ParticipantId) -> Option<Seat> {
        self.players
            .iter()
            .find(|(_, p)| matches!(p, Some(p) if p.id() == participant))
            .map(|(seat, _)| seat)
    }

    // === Participants ===

    /// Seat `participant` in the first free slot, or register a spectator
    /// when both are taken. Joining again returns the existing role.
    #[instrument(skip(self, participant), fields(match_id = %self.id, participant = %participant.id))]
    pub fn join(&mut self, participant: Participant) -> Role {
        if let Some(role) = self.role_of(participant.id) {
            debug!(?role, "already joined");
            return role;
        }

        let free = Seat::ALL.into_iter().find(|&seat| self.players[seat].is_none());
        let role = match free {
            Some(seat) => {
                info!(%seat, name = %participant.name, color = ?seat.color(), "player seated");
                self.players[seat] = Some(Player::seated(
                    participant,
                    seat,
                    self.config.grid_size,
                    self.config.walls_per_player,
                ));
                Role::Player(seat)
            }
            None => {
                info!(name = %participant.name, "spectator joined");
                self.spectators.insert(participant.id, participant);
                Role::Spectator
            }
        };

        self.listeners.emit(&MatchEvent::ParticipantsChanged);

        if self.phase == MatchPhase::WaitingForPlayers && self.players.iter().all(|(_, p)| p.is_some()) {
            self.phase = MatchPhase::InProgress;
            self.current = Seat::First;
            info!("match started");
            self.listeners.emit(&MatchEvent::BoardChanged);
        }

        role
    }

    /// Remove a spectator. Seated players keep their seat; returns whether
    /// anyone was removed.
    #[instrument(skip(self), fields(match_id = %self.id))]
    pub fn leave(&mut self, participant: ParticipantId) -> bool {
        if self.spectators.remove(&participant).is_none() {
            return false;
        }
        info!("spectator left");
        self.listeners.emit(&MatchEvent::ParticipantsChanged);
        true
    }

    // === Queries ===

    fn in_progress(&self) -> Result<(), Rejection> {
        if self.phase.is_in_progress() {
            Ok(())
        } else {
            Err(Rejection::MatchNotInProgress(self.phase))
        }
    }

    fn seated(&self, seat: Seat) -> Result<&Player, InvariantViolation> {
        self.players[seat]
            .as_ref()
            .ok_or_else(|| InvariantViolation::Inconsistent(format!("{seat} seat empty while {}", self.phase)))
    }

    fn seated_mut(&mut self, seat: Seat) -> Result<&mut Player, InvariantViolation> {
        let phase = self.phase;
        self.players[seat]
            .as_mut()
            .ok_or_else(|| InvariantViolation::Inconsistent(format!("{seat} seat empty while {phase}")))
    }

    /// Mover and opponent for the current turn.
    fn contestants(&self) -> Result<(&Player, &Player), EngineError> {
        self.in_progress()?;
        Ok((self.seated(self.current)?, self.seated(self.current.opponent())?))
    }

    /// Destinations for the player to move.
    pub fn legal_moves(&self) -> Result<SmallVec<[CellAddress; 8]>, EngineError> {
        let (mover, opponent) = self.contestants()?;
        Ok(rules::legal_moves(&self.board, mover, opponent)?)
    }

    /// Corners the player to move may select to start a wall. Empty when
    /// they have no walls left.
    pub fn legal_wall_anchors(&self) -> Result<Vec<CornerAddress>, EngineError> {
        let (mover, opponent) = self.contestants()?;
        if mover.walls_remaining() == 0 {
            return Ok(Vec::new());
        }
        Ok(rules::legal_anchors(&self.board, &[mover, opponent])?)
    }

    /// Second corners completing a legal wall from `anchor`.
    ///
    /// An anchor with no completion is rejected with
    /// [`WallFault::NoCompletions`] rather than answered with an empty set.
    pub fn legal_wall_completions(&self, anchor: CornerAddress) -> Result<SmallVec<[CornerAddress; 4]>, EngineError> {
        let (mover, opponent) = self.contestants()?;
        if mover.walls_remaining() == 0 {
            return Err(Rejection::NoWallsRemaining.into());
        }
        let completions = rules::legal_second_corners(&self.board, &[mover, opponent], anchor)?;
        if completions.is_empty() {
            return Err(WallFault::NoCompletions.into());
        }
        Ok(completions)
    }

    /// Shortest path length from `seat`'s pawn to its goal row.
    pub fn distance_to_goal(&self, seat: Seat) -> Result<Option<u32>, EngineError> {
        let player = self.players[seat]
            .as_ref()
            .ok_or(Rejection::MatchNotInProgress(self.phase))?;
        Ok(rules::distance_to_goal(&self.board, player)?)
    }

    // === Turns ===

    /// Phase first, then identity of the player to move.
    fn authorize(&self, participant: ParticipantId) -> Result<Seat, Rejection> {
        self.in_progress()?;
        match self.players[self.current].as_ref() {
            Some(player) if player.id() == participant => Ok(self.current),
            _ => Err(Rejection::InvalidParticipant(participant)),
        }
    }

    /// Move the current player's pawn to `target`.
    #[instrument(skip(self), fields(match_id = %self.id, turn = self.turn))]
    pub fn request_move(&mut self, participant: ParticipantId, target: CellAddress) -> Result<MoveOutcome, EngineError> {
        let seat = self.authorize(participant).map_err(|r| self.rejected(r))?;
        if !self.legal_moves()?.contains(&target) {
            return Err(self.rejected(Rejection::IllegalMove(target)));
        }

        let player = self.seated_mut(seat)?;
        let from = player.position();
        player.move_to(target);
        self.record(seat, Action::Move { from, to: target });
        debug!(%seat, %from, to = %target, "pawn moved");
        self.listeners.emit(&MatchEvent::PlayerMoved { seat, from, to: target });

        if self.board.expect_cell(target)?.is_victory_for(seat) {
            let record = self.finish(seat)?;
            return Ok(MoveOutcome::Victory(record));
        }

        self.advance();
        self.listeners.emit(&MatchEvent::BoardChanged);
        Ok(MoveOutcome::Moved {
            from,
            to: target,
            next: self.current,
        })
    }

    /// Place a wall for the current player from `anchor` to `second`.
    #[instrument(skip(self), fields(match_id = %self.id, turn = self.turn))]
    pub fn request_wall_placement(
        &mut self,
        participant: ParticipantId,
        anchor: CornerAddress,
        second: CornerAddress,
    ) -> Result<WallOutcome, EngineError> {
        let seat = self.authorize(participant).map_err(|r| self.rejected(r))?;
        let (mover, opponent) = self.contestants()?;
        if mover.walls_remaining() == 0 {
            return Err(self.rejected(Rejection::NoWallsRemaining));
        }

        let checked = Wall::between(anchor, second)
            .map_err(EngineError::from)
            .and_then(|wall| rules::check_wall_placement(&self.board, &[mover, opponent], &wall).map(|()| wall));
        let wall = match checked {
            Ok(wall) => wall,
            Err(EngineError::Rejected(rejection)) => {
                let rejection = if rules::legal_second_corners(&self.board, &[mover, opponent], anchor)?.is_empty() {
                    Rejection::IllegalWallPlacement(WallFault::NoCompletions)
                } else {
                    rejection
                };
                return Err(self.rejected(rejection));
            }
            Err(err) => return Err(err),
        };

        self.board.place(wall)?;
        let player = self.seated_mut(seat)?;
        player.spend_wall();
        let walls_remaining = player.walls_remaining();
        self.record(seat, Action::PlaceWall(wall));
        debug!(%seat, %wall, walls_remaining, "wall placed");
        self.listeners.emit(&MatchEvent::WallPlaced { seat, wall });

        self.advance();
        self.listeners.emit(&MatchEvent::BoardChanged);
        Ok(WallOutcome {
            wall,
            seat,
            walls_remaining,
            next: self.current,
        })
    }

    fn rejected(&self, rejection: Rejection) -> EngineError {
        debug!(match_id = %self.id, reason = %rejection, "request rejected");
        rejection.into()
    }

    fn record(&mut self, seat: Seat, action: Action) {
        self.history.push_back(ActionRecord::new(seat, action, self.turn));
    }

    fn advance(&mut self) {
        self.turn += 1;
        self.current = self.current.opponent();
    }

    /// Log the win, pass through `Finished`, reset and resume.
    fn finish(&mut self, winner: Seat) -> Result<VictoryRecord, EngineError> {
        let record = VictoryRecord::new(self.seated(winner)?, Utc::now());
        info!(match_id = %self.id, seat = %winner, name = %record.name, "victory");
        self.phase = MatchPhase::Finished;
        self.victories.push_back(record.clone());
        self.listeners.emit(&MatchEvent::Victory(record.clone()));

        self.reset_game();
        self.phase = MatchPhase::InProgress;
        self.listeners.emit(&MatchEvent::BoardChanged);
        self.listeners.emit(&MatchEvent::VictoryFinished);
        Ok(record)
    }

    /// Clear walls and history, return pawns and inventories to their
    /// starting state, player 1 to move.
    fn reset_game(&mut self) {
        self.board.reset();
        let (size, walls) = (self.config.grid_size, self.config.walls_per_player);
        for (_, player) in self.players.iter_mut() {
            if let Some(player) = player {
                player.reset(size, walls);
            }
        }
        self.current = Seat::First;
        self.history.clear();
        self.turn = 0;
        info!(match_id = %self.id, "match reset");
    }

    // === Listeners ===

    /// Register a callback for every event of this match.
    pub fn subscribe(&mut self, callback: impl FnMut(&MatchEvent) + Send + 'static) -> ListenerId {
        self.listeners.register(callback)
    }

    /// Register a callback for the given event kinds only.
    pub fn subscribe_for(
        &mut self,
        kinds: &[EventKind],
        callback: impl FnMut(&MatchEvent) + Send + 'static,
    ) -> ListenerId {
        self.listeners.register_for(kinds, callback)
    }

    /// Drop a callback. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unregister(id)
    }
}
