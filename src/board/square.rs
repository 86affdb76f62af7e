//! Square classification.

use serde::{Deserialize, Serialize};

use crate::prompts::PromptCategory;

/// What a square does when a token comes to rest on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SquareKind {
    /// Plain square, draws a normal prompt.
    Normal,
    /// Star square (ladder foot on shortcut boards), draws a praise prompt.
    Praise,
    /// Heart square (snake head on shortcut boards), draws a heart prompt.
    Heart,
    /// Final square. Reaching it wins the game.
    Finish,
}

impl SquareKind {
    /// Prompt category drawn on this square. `None` on the finish.
    #[must_use]
    pub const fn prompt_category(self) -> Option<PromptCategory> {
        match self {
            SquareKind::Normal => Some(PromptCategory::Normal),
            SquareKind::Praise => Some(PromptCategory::Praise),
            SquareKind::Heart => Some(PromptCategory::Heart),
            SquareKind::Finish => None,
        }
    }

    /// True for the winning square.
    #[must_use]
    pub const fn is_finish(self) -> bool {
        matches!(self, SquareKind::Finish)
    }
}
