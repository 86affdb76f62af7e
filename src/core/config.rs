//! Game configuration.
//!
//! A `GameConfig` fixes everything the orchestrator needs before the first
//! roll: board layout, dice mode, roster limits, presentation pacing and the
//! RNG seed. All fields have defaults matching the stock ladder board.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::dice::DiceMode;
use crate::board::BoardLayout;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can start with (one per palette color).
pub const MAX_PLAYERS: usize = 6;

/// Presentation delays between orchestrator steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// From the roll being recorded to the token starting to move.
    pub roll_delay_ms: u64,

    /// From the token starting to move to the landing being resolved.
    pub move_delay_ms: u64,
}

impl Pacing {
    /// No delays; every step is due immediately.
    pub const INSTANT: Pacing = Pacing {
        roll_delay_ms: 0,
        move_delay_ms: 0,
    };

    /// Roll delay as a `Duration`.
    #[must_use]
    pub fn roll_delay(&self) -> Duration {
        Duration::from_millis(self.roll_delay_ms)
    }

    /// Move delay as a `Duration`.
    #[must_use]
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            roll_delay_ms: 1000,
            move_delay_ms: 1000,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for dice and prompt draws.
    pub seed: u64,

    /// Board to play on.
    pub layout: BoardLayout,

    /// One die or two.
    pub dice: DiceMode,

    /// Presentation delays.
    pub pacing: Pacing,

    /// Roster size limits, inclusive.
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            layout: BoardLayout::default(),
            dice: DiceMode::default(),
            pacing: Pacing::default(),
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
        }
    }
}

impl GameConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the board layout.
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the dice mode.
    pub fn with_dice(mut self, dice: DiceMode) -> Self {
        self.dice = dice;
        self
    }

    /// Set the pacing.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Set roster limits, clamped to the palette size.
    pub fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        self.max_players = max.clamp(1, MAX_PLAYERS);
        self.min_players = min.clamp(1, self.max_players);
        self
    }
}
