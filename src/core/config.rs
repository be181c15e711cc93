//! Match configuration.
//!
//! Hosts build a `MatchConfig` (or deserialize one from any serde format) and
//! hand it to [`Match::new`](crate::game::Match::new). The board is square;
//! only its side length and the per-player wall inventory are configurable.

use serde::{Deserialize, Serialize};

use super::error::Rejection;

/// Side length of the standard board.
pub const DEFAULT_GRID_SIZE: u8 = 9;

/// Walls each player starts with on the standard board.
pub const DEFAULT_WALLS_PER_PLAYER: u8 = 10;

/// Largest grid whose corner lattice still fits `u8` coordinates.
pub const MAX_GRID_SIZE: u8 = u8::MAX - 1;

/// Configuration for a single match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Cells per side (N).
    pub grid_size: u8,

    /// Walls each player starts with, restored on every reset.
    pub walls_per_player: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            walls_per_player: DEFAULT_WALLS_PER_PLAYER,
        }
    }
}

impl MatchConfig {
    /// Standard 9x9 board with 10 walls per player.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board side length.
    #[must_use]
    pub fn with_grid_size(mut self, size: u8) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the per-player wall inventory.
    #[must_use]
    pub fn with_walls_per_player(mut self, walls: u8) -> Self {
        self.walls_per_player = walls;
        self
    }

    /// Check the configuration can host a match.
    ///
    /// The grid needs at least two rows so the two home rows differ.
    pub fn validate(&self) -> Result<(), Rejection> {
        if self.grid_size == 0 {
            return Err(Rejection::InvalidConfiguration("grid size must be positive"));
        }
        if self.grid_size < 2 {
            return Err(Rejection::InvalidConfiguration("grid size must be at least 2"));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(Rejection::InvalidConfiguration("grid size exceeds coordinate range"));
        }
        Ok(())
    }
}
