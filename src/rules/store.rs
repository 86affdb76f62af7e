//! Owned game state with dispatch, history and subscribers.
//!
//! `GameStore` is the only holder of the live `GameState`. Everything else
//! reads snapshots or calls `dispatch`. Subscribers are called after every
//! action that changed state, in subscription order.

use im::Vector;
use tracing::{debug, info};

use super::reducer;
use crate::core::{ActionRecord, GameAction, GamePhase, GameState, Player};

/// Handle returned by `GameStore::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Listener = Box<dyn FnMut(&GameState)>;

/// The live game.
pub struct GameStore {
    state: GameState,
    history: Vector<ActionRecord>,
    next_sequence: u64,
    listeners: Vec<(SubscriberId, Listener)>,
    next_subscriber: u64,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore {
    /// Create a store holding the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            history: Vector::new(),
            next_sequence: 0,
            listeners: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cheap copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Player holding the turn, or `None` if the roster is empty.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.state.current_player()
    }

    /// Every action dispatched since the last `ResetGame`, applied or not.
    ///
    /// A reset starts a fresh log headed by the reset itself, so replaying
    /// the log into a new store rebuilds the current state.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Apply an action. Returns true if the state changed.
    pub fn dispatch(&mut self, action: GameAction) -> bool {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let next = reducer::step(&self.state, &action);
        let applied = next.is_some();
        if let Some(next) = next {
            let was = self.state.phase;
            self.state = next;
            if was != self.state.phase {
                log_phase_change(was, &self.state);
            }
        }
        debug!(sequence, action = action.name(), applied, "dispatch");
        if matches!(action, GameAction::ResetGame) {
            self.history.clear();
        }
        self.history.push_back(ActionRecord::new(sequence, action, applied));

        if applied {
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }
        applied
    }

    /// Register a callback run after every applied action.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}

fn log_phase_change(was: GamePhase, state: &GameState) {
    match state.phase {
        GamePhase::Playing => info!(players = state.player_count(), "game started"),
        GamePhase::Ended => {
            let winner = state.winner.as_ref().map(|p| p.name.as_str()).unwrap_or_default();
            info!(winner, "game ended");
        }
        GamePhase::Setup => debug!(?was, "game reset"),
    }
}
