//! Error types for the fallible outer operations.
//!
//! The reducer itself never fails: unknown ids and out-of-phase actions are
//! no-ops. Errors come from roster validation, prompt content, and the
//! orchestrator refusing a request the presentation layer should have
//! disabled.

use thiserror::Error;

use crate::prompts::PromptCategory;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised outside the reducer.
#[derive(Debug, Error)]
pub enum GameError {
    /// A player name is empty after trimming. Holds the 1-based seat.
    #[error("player {0} has no name")]
    EmptyName(usize),

    /// Two players picked the same color.
    #[error("color {0} is used by more than one player")]
    DuplicateColor(crate::core::PlayerColor),

    /// Two players share an id.
    #[error("player id '{0}' is used more than once")]
    DuplicateId(String),

    /// Roster size outside the supported range.
    #[error("{count} players is not supported (expected {min}-{max})")]
    PlayerCount { count: usize, min: usize, max: usize },

    /// No prompts for a category a reachable square needs.
    #[error("no prompts in category '{0}'")]
    EmptyPromptPool(PromptCategory),

    /// Gameplay request outside the playing phase.
    #[error("game is not in progress")]
    NotPlaying,

    /// Roll requested while a token is still moving.
    #[error("a move is still in progress")]
    Moving,

    /// Roll requested while a prompt waits for an answer.
    #[error("prompt '{0}' is still waiting for an answer")]
    PromptPending(String),

    /// Roll requested before the previous roll finished resolving.
    #[error("previous roll has not resolved yet")]
    RollInFlight,

    /// Mission outcome reported with no prompt showing.
    #[error("no prompt is waiting for an answer")]
    NoPendingPrompt,

    /// The roster is empty.
    #[error("no current player")]
    NoCurrentPlayer,

    /// State snapshot could not be encoded.
    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}
