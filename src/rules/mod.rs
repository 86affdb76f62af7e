//! The turn/game state machine.
//!
//! - `reducer`: pure `(GameState, GameAction) -> GameState`
//! - `store`: owns the live state, keeps the action log, notifies subscribers

pub mod reducer;
pub mod store;

pub use reducer::{reduce, step};
pub use store::{GameStore, SubscriberId};
