//! The `Topology` capability shared by every board layout.

use serde::{Deserialize, Serialize};

use super::square::SquareKind;

/// A board layout: how many squares, what each one is, where shortcuts lead.
///
/// ## Implementation Notes
///
/// - Squares are numbered `0..=last_square()`; tokens start on 0
/// - `classify` must return `Finish` for `last_square()` and beyond
/// - `redirect` targets are clamped by `land`, so layouts may point past the end
pub trait Topology {
    /// Short layout name for logs.
    fn name(&self) -> &'static str;

    /// Index of the finish square.
    fn last_square(&self) -> u32;

    /// Classify a square.
    fn classify(&self, square: u32) -> SquareKind;

    /// Shortcut destination for a square, if it has one.
    fn redirect(&self, _square: u32) -> Option<u32> {
        None
    }

    /// Clamp a raw position onto the board.
    fn clamp(&self, square: u32) -> u32 {
        square.min(self.last_square())
    }
}

/// Where a move ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landing {
    /// Square reached by the dice, after clamping.
    pub landed: u32,
    /// Square the token rests on after any shortcut, after clamping.
    pub resting: u32,
    /// Classification of the resting square.
    pub kind: SquareKind,
}

impl Landing {
    /// True if a ladder or snake moved the token.
    #[must_use]
    pub fn redirected(&self) -> bool {
        self.landed != self.resting
    }
}

/// Resolve a move of `steps` squares from `from`.
///
/// Clamps to the board, then follows at most one redirect. A token that
/// reaches the finish by dice is never redirected.
pub fn land(board: &dyn Topology, from: u32, steps: u32) -> Landing {
    let landed = board.clamp(from.saturating_add(steps));
    let resting = if board.classify(landed).is_finish() {
        landed
    } else {
        board.redirect(landed).map_or(landed, |to| board.clamp(to))
    };
    Landing {
        landed,
        resting,
        kind: board.classify(resting),
    }
}
