//! The game reducer: `(GameState, GameAction) -> GameState`.
//!
//! ## Rules
//!
//! - Every transition is computed on a copy; nothing is half-applied
//! - Actions naming an unknown player are no-ops
//! - Gameplay actions outside `Playing` are no-ops, so a late step from a
//!   previous game cannot touch a fresh one
//! - `SetMoving` and `ResetGame` work in every phase
//!
//! Positions are stored verbatim. Clamping and shortcuts are resolved by the
//! caller before `MovePlayer` is dispatched.

use crate::core::{GameAction, GamePhase, GameState};

/// Apply an action, returning the next state.
///
/// No-op actions return an unchanged copy.
#[must_use]
pub fn reduce(state: &GameState, action: &GameAction) -> GameState {
    step(state, action).unwrap_or_else(|| state.clone())
}

/// Apply an action, returning `None` if it is a no-op.
#[must_use]
pub fn step(state: &GameState, action: &GameAction) -> Option<GameState> {
    match action {
        GameAction::SetPlayers { players } => {
            if state.phase != GamePhase::Setup {
                return None;
            }
            let mut next = state.clone();
            next.players = players.iter().cloned().collect();
            next.current_player_index = 0;
            Some(next)
        }

        GameAction::StartGame => {
            if state.phase != GamePhase::Setup || state.players.is_empty() {
                return None;
            }
            let mut next = state.clone();
            next.phase = GamePhase::Playing;
            next.current_player_index = 0;
            Some(next)
        }

        GameAction::RollDice { roll } => {
            let mut next = playing(state)?;
            next.last_roll = Some(roll.total());
            next.is_double = roll.is_double();
            next.dice = Some(roll.clone());
            Some(next)
        }

        GameAction::MovePlayer {
            player_id,
            position,
        } => {
            let index = state.player_index(player_id)?;
            let mut next = playing(state)?;
            if let Some(player) = next.players.get_mut(index) {
                player.position = *position;
            }
            Some(next)
        }

        GameAction::SetQuestion { prompt } => {
            let mut next = playing(state)?;
            next.active_prompt = Some(prompt.clone());
            Some(next)
        }

        GameAction::SetPreviousPosition {
            player_id,
            position,
        } => {
            state.player_index(player_id)?;
            let mut next = playing(state)?;
            next.previous_position = Some(*position);
            Some(next)
        }

        GameAction::MissionSuccess => {
            let mut next = playing(state)?;
            next.active_prompt = None;
            next.previous_position = None;
            Some(next)
        }

        GameAction::MissionFail { player_id } => {
            let index = state.player_index(player_id)?;
            let mut next = playing(state)?;
            if let (Some(rollback), Some(player)) = (state.previous_position, next.players.get_mut(index)) {
                player.position = rollback;
            }
            next.active_prompt = None;
            next.previous_position = None;
            Some(next)
        }

        GameAction::NextTurn => {
            let mut next = playing(state)?;
            let count = next.players.len();
            if !next.is_double && count > 0 {
                next.current_player_index = (next.current_player_index + 1) % count;
            }
            next.last_roll = None;
            next.dice = None;
            next.is_double = false;
            next.active_prompt = None;
            next.previous_position = None;
            Some(next)
        }

        GameAction::EndGame { winner } => {
            let index = state.player_index(&winner.id)?;
            let mut next = playing(state)?;
            next.phase = GamePhase::Ended;
            next.winner = next.players.get(index).cloned();
            Some(next)
        }

        GameAction::SetMoving { moving } => {
            let mut next = state.clone();
            next.is_moving = *moving;
            Some(next)
        }

        GameAction::ResetGame => Some(GameState::new()),
    }
}

fn playing(state: &GameState) -> Option<GameState> {
    state.is_playing().then(|| state.clone())
}
