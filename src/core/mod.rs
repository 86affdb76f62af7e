//! Core types: players, dice, RNG, state, actions, configuration.
//!
//! Everything the reducer reads or writes lives here. Board and prompt
//! content live in their own modules.

pub mod action;
pub mod config;
pub mod dice;
pub mod player;
pub mod rng;
pub mod roster;
pub mod state;

pub use action::{ActionRecord, GameAction};
pub use config::{GameConfig, Pacing, MAX_PLAYERS, MIN_PLAYERS};
pub use dice::{DiceMode, DiceRoll, DIE_SIDES};
pub use player::{Player, PlayerColor, PlayerId};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use roster::{validate_roster, RosterBuilder};
pub use state::{GamePhase, GameState};
