//! # heart-ladder
//!
//! Turn and movement engine for a conversational dice board game.
//!
//! Players roll, move along a board, and answer a prompt chosen by the kind
//! of square they rest on. Answering keeps the move; declining sends the
//! token back to where it rolled from. First to the finish square wins.
//!
//! ## Design Principles
//!
//! 1. **Pure Reducer**: Every state change is an action applied by
//!    `rules::reduce` to an immutable `GameState`. Invalid or out-of-phase
//!    actions are no-ops, never errors.
//!
//! 2. **Board-Agnostic**: Movement goes through the `Topology` trait. The
//!    stepped ladder, the serpentine grid and snakes-and-ladders are
//!    configured, not hardcoded.
//!
//! 3. **Deterministic**: Dice and prompt draws come from a seeded
//!    `RandomSource`. Delays run on a virtual clock, so a whole game can be
//!    replayed from its seed.
//!
//! ## Modules
//!
//! - `core`: Players, dice, RNG, state, actions, roster, configuration
//! - `board`: Square kinds, the `Topology` trait and stock layouts
//! - `prompts`: Prompt content and category-filtered draws
//! - `rules`: The reducer and the `GameStore` that owns live state
//! - `turn`: Orchestrator sequencing rolls, moves, prompts and turns
//! - `sim`: Headless whole-game simulation

pub mod board;
pub mod core;
pub mod error;
pub mod prompts;
pub mod rules;
pub mod sim;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, DiceMode, DiceRoll, GameAction, GameConfig, GamePhase, GameRng, GameState, Pacing, Player,
    PlayerColor, PlayerId, RandomSource, RosterBuilder, ScriptedRng,
};

pub use crate::board::{BoardLayout, Grid, LadderSteps, Landing, SnakesAndLadders, SquareKind, Topology};

pub use crate::prompts::{Prompt, PromptCategory, PromptPool};

pub use crate::rules::{reduce, GameStore, SubscriberId};

pub use crate::turn::{MissionOutcome, Orchestrator, TurnEvent};

pub use crate::sim::{GameSummary, Simulation, SimulationConfig, SimulationReport};

pub use crate::error::{GameError, GameResult};
