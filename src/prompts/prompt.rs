//! Prompt cards shown when a player lands on a square.

use serde::{Deserialize, Serialize};

/// Prompt category. Each non-finish square maps to exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptCategory {
    /// Everyday conversation starters.
    Normal,
    /// Say something kind about another player.
    Praise,
    /// Share a feeling or a memory.
    Heart,
}

impl PromptCategory {
    /// All categories.
    pub const ALL: [PromptCategory; 3] = [
        PromptCategory::Normal,
        PromptCategory::Praise,
        PromptCategory::Heart,
    ];

    /// Lowercase name, matching the prompt id prefix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PromptCategory::Normal => "normal",
            PromptCategory::Praise => "praise",
            PromptCategory::Heart => "heart",
        }
    }
}

impl std::fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable prompt card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prompt {
    /// Stable identifier, e.g. `"heart_3"`.
    pub id: String,
    /// Text read aloud by the player.
    pub text: String,
    /// Which squares draw this prompt.
    pub category: PromptCategory,
}

impl Prompt {
    /// Create a prompt.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, category: PromptCategory) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category,
        }
    }
}
