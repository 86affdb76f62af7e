//! Prompt pool: the conversation cards drawn on landing.
//!
//! Prompts are immutable. Squares pick a `PromptCategory` and the pool
//! draws uniformly within it.

mod pool;
mod prompt;

pub use pool::PromptPool;
pub use prompt::{Prompt, PromptCategory};
