//! Reducer actions.
//!
//! `GameAction` is the complete inbound surface of the state machine. The
//! orchestrator (or a UI) builds actions; only the reducer interprets them.
//! Serialized actions carry a `type` tag in the same SCREAMING_SNAKE_CASE
//! names the presentation layer dispatches.

use serde::{Deserialize, Serialize};

use super::dice::DiceRoll;
use super::player::{Player, PlayerId};
use crate::prompts::Prompt;

/// One state transition request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameAction {
    /// Replace the roster. Accepted only during setup.
    SetPlayers { players: Vec<Player> },
    /// Leave setup. Requires a non-empty roster.
    StartGame,
    /// Record a roll. Does not move anyone.
    RollDice { roll: DiceRoll },
    /// Put a player on a square, verbatim.
    MovePlayer { player_id: PlayerId, position: u32 },
    /// Show a prompt.
    SetQuestion { prompt: Prompt },
    /// Remember where to send the player if the mission fails.
    SetPreviousPosition { player_id: PlayerId, position: u32 },
    /// Mission passed: drop the prompt, keep the position.
    MissionSuccess,
    /// Mission failed: drop the prompt and roll the player back.
    MissionFail { player_id: PlayerId },
    /// Hand the turn on, unless the last roll was a double.
    NextTurn,
    /// Declare a winner. Terminal until reset.
    EndGame { winner: Player },
    /// Toggle the animation gate.
    SetMoving { moving: bool },
    /// Return to the initial state.
    ResetGame,
}

impl GameAction {
    /// Action name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            GameAction::SetPlayers { .. } => "SET_PLAYERS",
            GameAction::StartGame => "START_GAME",
            GameAction::RollDice { .. } => "ROLL_DICE",
            GameAction::MovePlayer { .. } => "MOVE_PLAYER",
            GameAction::SetQuestion { .. } => "SET_QUESTION",
            GameAction::SetPreviousPosition { .. } => "SET_PREVIOUS_POSITION",
            GameAction::MissionSuccess => "MISSION_SUCCESS",
            GameAction::MissionFail { .. } => "MISSION_FAIL",
            GameAction::NextTurn => "NEXT_TURN",
            GameAction::EndGame { .. } => "END_GAME",
            GameAction::SetMoving { .. } => "SET_MOVING",
            GameAction::ResetGame => "RESET_GAME",
        }
    }

    /// Shorthand for `MovePlayer`.
    #[must_use]
    pub fn move_player(player_id: impl Into<PlayerId>, position: u32) -> Self {
        GameAction::MovePlayer {
            player_id: player_id.into(),
            position,
        }
    }
}

/// A dispatched action with its position in the log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Dispatch order, starting at 0.
    pub sequence: u64,

    /// The action dispatched.
    pub action: GameAction,

    /// Whether the reducer changed state.
    pub applied: bool,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u64, action: GameAction, applied: bool) -> Self {
        Self {
            sequence,
            action,
            applied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerColor;

    #[test]
    fn test_action_names() {
        assert_eq!(GameAction::StartGame.name(), "START_GAME");
        assert_eq!(GameAction::move_player("1", 4).name(), "MOVE_PLAYER");
        assert_eq!(GameAction::SetMoving { moving: true }.name(), "SET_MOVING");
    }

    #[test]
    fn test_action_serialization_tag() {
        let action = GameAction::move_player("2", 9);
        let json = serde_json::to_string(&action).unwrap();

        assert_eq!(json, r#"{"type":"MOVE_PLAYER","player_id":"2","position":9}"#);

        let back: GameAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_action_record_serialization() {
        let action = GameAction::SetPlayers {
            players: vec![Player::new("1", "Ari", PlayerColor::Red)],
        };
        let record = ActionRecord::new(3, action, true);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
