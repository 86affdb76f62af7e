//! Turn orchestration: rolls, moves, prompts and answers in sequence.
//!
//! The orchestrator is the only caller of `GameStore::dispatch` during play.
//! Presentation delays run on a virtual `Timeline` driven by the host.

mod orchestrator;
mod timeline;

pub use orchestrator::{MissionOutcome, Orchestrator, TurnEvent};
pub use timeline::{Scheduled, Timeline};
