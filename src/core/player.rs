//! Seats, colors and per-seat data storage.
//!
//! ## Seat
//!
//! A match has exactly two seats. `Seat::First` starts on row 0 and races to
//! row N-1; `Seat::Second` starts on row N-1 and races to row 0.
//!
//! ## SeatMap
//!
//! Fixed two-entry storage indexed by `Seat`, the two-player counterpart of a
//! per-player map.
//!
//! ## Player
//!
//! A seated participant: pawn position and remaining wall inventory.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::coord::CellAddress;
use super::id::ParticipantId;

/// One of the two player slots of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    /// Player 1: first to join, first to move.
    First,
    /// Player 2.
    Second,
}

impl Seat {
    /// Both seats, player 1 first.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// 0 for player 1, 1 for player 2.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Pawn color of this seat.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Seat::First => Color::Blue,
            Seat::Second => Color::Red,
        }
    }

    /// Row this seat starts on.
    #[must_use]
    pub const fn home_row(self, size: u8) -> u8 {
        match self {
            Seat::First => 0,
            Seat::Second => size - 1,
        }
    }

    /// Row this seat must reach (the opponent's home row).
    #[must_use]
    pub const fn goal_row(self, size: u8) -> u8 {
        self.opponent().home_row(size)
    }

    /// Fixed start cell: the middle of the home row.
    #[must_use]
    pub const fn start_cell(self, size: u8) -> CellAddress {
        CellAddress::new(self.home_row(size), size / 2)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Pawn color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Player 1.
    Blue,
    /// Player 2.
    Red,
}

impl Color {
    /// CSS-style hex code.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Color::Red => "#FF0000",
            Color::Blue => "#0000FF",
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use quoridor_engine::core::{Seat, SeatMap};
///
/// let mut walls: SeatMap<u8> = SeatMap::with_value(10);
/// walls[Seat::Second] -= 1;
/// assert_eq!(walls[Seat::First], 10);
/// assert_eq!(walls[Seat::Second], 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::First), factory(Seat::Second)],
        }
    }

    /// Create a new SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs, player 1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs, player 1 first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for SeatMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

/// Someone interacting with a match: an id plus a display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Host-assigned identity.
    pub id: ParticipantId,
    /// Name shown to other participants.
    pub name: String,
}

impl Participant {
    /// Create a participant.
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A seated participant and their pawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    participant: Participant,
    seat: Seat,
    position: CellAddress,
    walls_remaining: u8,
}

impl Player {
    /// Create a player at an explicit position.
    #[must_use]
    pub fn new(participant: Participant, seat: Seat, position: CellAddress, walls_remaining: u8) -> Self {
        Self {
            participant,
            seat,
            position,
            walls_remaining,
        }
    }

    /// Create a player on its seat's start cell.
    #[must_use]
    pub fn seated(participant: Participant, seat: Seat, size: u8, walls: u8) -> Self {
        Self::new(participant, seat, seat.start_cell(size), walls)
    }

    /// Participant identity.
    #[must_use]
    pub fn id(&self) -> ParticipantId {
        self.participant.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.participant.name
    }

    /// The participant occupying this seat.
    #[must_use]
    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    /// Seat.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Pawn color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.seat.color()
    }

    /// Current pawn cell.
    #[must_use]
    pub fn position(&self) -> CellAddress {
        self.position
    }

    /// Walls left to place.
    #[must_use]
    pub fn walls_remaining(&self) -> u8 {
        self.walls_remaining
    }

    /// Whether `cell` is one of this player's victory cells.
    #[must_use]
    pub fn is_goal(&self, cell: CellAddress, size: u8) -> bool {
        cell.row() == self.seat.goal_row(size)
    }

    pub(crate) fn move_to(&mut self, cell: CellAddress) {
        self.position = cell;
    }

    pub(crate) fn spend_wall(&mut self) {
        self.walls_remaining = self.walls_remaining.saturating_sub(1);
    }

    /// Back to the start cell with a full inventory.
    pub(crate) fn reset(&mut self, size: u8, walls: u8) {
        self.position = self.seat.start_cell(size);
        self.walls_remaining = walls;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Participant {
        Participant::new(ParticipantId(1), "alice")
    }

    #[test]
    fn test_seat_basics() {
        assert_eq!(Seat::First.index(), 0);
        assert_eq!(Seat::Second.index(), 1);
        assert_eq!(Seat::First.opponent(), Seat::Second);
        assert_eq!(Seat::Second.opponent(), Seat::First);
        assert_eq!(format!("{}", Seat::Second), "Player 2");
    }

    #[test]
    fn test_seat_rows_and_start() {
        assert_eq!(Seat::First.home_row(9), 0);
        assert_eq!(Seat::First.goal_row(9), 8);
        assert_eq!(Seat::Second.home_row(9), 8);
        assert_eq!(Seat::Second.goal_row(9), 0);
        assert_eq!(Seat::First.start_cell(9), CellAddress::new(0, 4));
        assert_eq!(Seat::Second.start_cell(9), CellAddress::new(8, 4));
        assert_eq!(Seat::Second.start_cell(5), CellAddress::new(4, 2));
    }

    #[test]
    fn test_colors() {
        assert_eq!(Seat::First.color(), Color::Blue);
        assert_eq!(Seat::Second.color(), Color::Red);
        assert_eq!(Color::Blue.hex(), "#0000FF");
        assert_eq!(Color::Red.hex(), "#FF0000");
    }

    #[test]
    fn test_seat_map() {
        let mut map: SeatMap<i32> = SeatMap::new(|s| s.index() as i32 * 10);
        assert_eq!(map[Seat::First], 0);
        assert_eq!(map[Seat::Second], 10);

        map[Seat::First] = 5;
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Seat::First, &5), (Seat::Second, &10)]);
    }

    #[test]
    fn test_seat_map_default() {
        let map: SeatMap<Option<u8>> = SeatMap::default();
        assert!(map.iter().all(|(_, v)| v.is_none()));
    }

    #[test]
    fn test_player_seated_and_reset() {
        let mut player = Player::seated(alice(), Seat::First, 9, 10);
        assert_eq!(player.position(), CellAddress::new(0, 4));
        assert_eq!(player.walls_remaining(), 10);
        assert_eq!(player.color(), Color::Blue);
        assert_eq!(player.name(), "alice");

        player.move_to(CellAddress::new(3, 3));
        player.spend_wall();
        player.spend_wall();
        assert_eq!(player.walls_remaining(), 8);

        player.reset(9, 10);
        assert_eq!(player.position(), CellAddress::new(0, 4));
        assert_eq!(player.walls_remaining(), 10);
    }

    #[test]
    fn test_spend_wall_saturates() {
        let mut player = Player::seated(alice(), Seat::Second, 9, 0);
        player.spend_wall();
        assert_eq!(player.walls_remaining(), 0);
    }

    #[test]
    fn test_is_goal() {
        let p1 = Player::seated(alice(), Seat::First, 9, 10);
        assert!(p1.is_goal(CellAddress::new(8, 0), 9));
        assert!(!p1.is_goal(CellAddress::new(0, 4), 9));
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<u8> = SeatMap::new(|s| s.index() as u8 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
