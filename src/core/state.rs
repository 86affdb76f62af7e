//! Game state: the single aggregate owned by the reducer.
//!
//! ## GameState
//!
//! - Roster in turn order, current player index
//! - Phase and winner
//! - Transient roll state (faces, sum, double flag)
//! - Pending prompt and its rollback target
//! - Animation gate
//!
//! The roster is an `im::Vector`, so every reducer step clones the state in
//! O(1) and snapshots handed to subscribers are cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::dice::DiceRoll;
use super::player::{Player, PlayerId};
use crate::error::GameResult;
use crate::prompts::Prompt;

/// Game phase. Moves forward only; `ResetGame` is the single way back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Roster being configured.
    #[default]
    Setup,
    /// Turns in progress.
    Playing,
    /// Someone reached the finish.
    Ended,
}

/// Complete game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Players in turn order.
    pub players: Vector<Player>,

    /// Index into `players` of whoever holds the turn.
    pub current_player_index: usize,

    /// Current phase.
    pub phase: GamePhase,

    /// Set exactly when `phase` is `Ended`.
    pub winner: Option<Player>,

    /// Sum of the last roll this turn.
    pub last_roll: Option<u32>,

    /// Faces of the last roll this turn.
    pub dice: Option<DiceRoll>,

    /// Last roll was a double; the turn stays with the same player.
    pub is_double: bool,

    /// Prompt waiting for a success/fail answer.
    pub active_prompt: Option<Prompt>,

    /// A token is animating; rolls are gated.
    pub is_moving: bool,

    /// Square to return to if the active prompt fails.
    pub previous_position: Option<u32>,
}

impl GameState {
    /// The initial state: empty roster, setup phase, nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Player holding the turn, or `None` if the roster is empty.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Roster index of a player.
    #[must_use]
    pub fn player_index(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// True while turns are being played.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// True once someone has won.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// True while a prompt waits for an answer.
    #[must_use]
    pub fn has_pending_prompt(&self) -> bool {
        self.active_prompt.is_some()
    }

    /// Encode the state with `bincode`.
    ///
    /// Two states with equal encodings are indistinguishable.
    pub fn snapshot_bytes(&self) -> GameResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }
}
