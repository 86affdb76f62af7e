//! Concrete board layouts.
//!
//! - `LadderSteps`: 15 squares stacked in five tiers, no shortcuts
//! - `Grid`: serpentine rectangle with striped special squares
//! - `SnakesAndLadders`: 100 squares with the classic shortcut table

use rustc_hash::FxHashMap;

use super::square::SquareKind;
use super::topology::Topology;

/// Squares per tier on the ladder-steps board, bottom to top.
const LADDER_TIERS: [std::ops::RangeInclusive<u32>; 5] = [0..=4, 5..=7, 8..=11, 12..=13, 14..=14];
const LADDER_PRAISE: [u32; 3] = [2, 6, 10];
const LADDER_HEART: [u32; 3] = [4, 8, 12];

/// Fifteen-square ladder climbed in five tiers.
#[derive(Clone, Copy, Debug, Default)]
pub struct LadderSteps;

impl LadderSteps {
    /// Create the ladder board.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Square ranges of each tier, bottom first.
    #[must_use]
    pub fn tiers(&self) -> &'static [std::ops::RangeInclusive<u32>] {
        &LADDER_TIERS
    }

    /// Tier holding `square`, or `None` off the board.
    #[must_use]
    pub fn tier_of(&self, square: u32) -> Option<usize> {
        LADDER_TIERS.iter().position(|tier| tier.contains(&square))
    }
}

impl Topology for LadderSteps {
    fn name(&self) -> &'static str {
        "ladder-steps"
    }

    fn last_square(&self) -> u32 {
        14
    }

    fn classify(&self, square: u32) -> SquareKind {
        if square >= self.last_square() {
            SquareKind::Finish
        } else if LADDER_PRAISE.contains(&square) {
            SquareKind::Praise
        } else if LADDER_HEART.contains(&square) {
            SquareKind::Heart
        } else {
            SquareKind::Normal
        }
    }
}

/// Longest grid side. Larger sizes are clamped to it.
pub const MAX_GRID_SIDE: u32 = 64;

/// Serpentine grid. Rows alternate direction so the track is continuous.
///
/// Special squares follow fixed strides: every `praise_every`-th square is a
/// star, every `heart_every`-th a heart. Star wins where both apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: u32,
    rows: u32,
    praise_every: u32,
    heart_every: u32,
}

impl Grid {
    /// Create a grid. Each side is clamped to `1..=MAX_GRID_SIDE`.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns: columns.clamp(1, MAX_GRID_SIDE),
            rows: rows.clamp(1, MAX_GRID_SIDE),
            praise_every: 7,
            heart_every: 5,
        }
    }

    /// Override the special-square strides. Zero disables a kind.
    #[must_use]
    pub fn with_strides(mut self, praise_every: u32, heart_every: u32) -> Self {
        self.praise_every = praise_every;
        self.heart_every = heart_every;
        self
    }

    /// `(row, column)` of a square, row 0 at the bottom.
    #[must_use]
    pub fn cell(&self, square: u32) -> (u32, u32) {
        let square = self.clamp(square);
        let row = square / self.columns;
        let offset = square % self.columns;
        let column = if row % 2 == 0 {
            offset
        } else {
            self.columns - 1 - offset
        };
        (row, column)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(6, 5)
    }
}

fn on_stride(square: u32, stride: u32) -> bool {
    stride > 0 && square > 0 && square % stride == 0
}

impl Topology for Grid {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn last_square(&self) -> u32 {
        self.columns * self.rows - 1
    }

    fn classify(&self, square: u32) -> SquareKind {
        if square >= self.last_square() {
            SquareKind::Finish
        } else if on_stride(square, self.praise_every) {
            SquareKind::Praise
        } else if on_stride(square, self.heart_every) {
            SquareKind::Heart
        } else {
            SquareKind::Normal
        }
    }
}

const CLASSIC_LADDERS: [(u32, u32); 9] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

const CLASSIC_SNAKES: [(u32, u32); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

/// Linear board with ladders (up, praise) and snakes (down, heart).
#[derive(Clone, Debug)]
pub struct SnakesAndLadders {
    last_square: u32,
    ladders: FxHashMap<u32, u32>,
    snakes: FxHashMap<u32, u32>,
}

impl SnakesAndLadders {
    /// Create a board from explicit shortcut tables.
    ///
    /// Ladders must climb and snakes must descend; entries that do not, or
    /// that start on the start or finish square, are ignored.
    #[must_use]
    pub fn new(last_square: u32, ladders: &[(u32, u32)], snakes: &[(u32, u32)]) -> Self {
        let on_track = |from: u32| from > 0 && from < last_square;
        Self {
            last_square,
            ladders: ladders
                .iter()
                .copied()
                .filter(|&(from, to)| on_track(from) && to > from)
                .collect(),
            snakes: snakes
                .iter()
                .copied()
                .filter(|&(from, to)| on_track(from) && to < from)
                .collect(),
        }
    }

    /// The classic 100-square board.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(100, &CLASSIC_LADDERS, &CLASSIC_SNAKES)
    }

    /// Number of ladders.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.ladders.len()
    }

    /// Number of snakes.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.snakes.len()
    }
}

impl Default for SnakesAndLadders {
    fn default() -> Self {
        Self::classic()
    }
}

impl Topology for SnakesAndLadders {
    fn name(&self) -> &'static str {
        "snakes-and-ladders"
    }

    fn last_square(&self) -> u32 {
        self.last_square
    }

    fn classify(&self, square: u32) -> SquareKind {
        if square >= self.last_square {
            SquareKind::Finish
        } else if self.ladders.contains_key(&square) {
            SquareKind::Praise
        } else if self.snakes.contains_key(&square) {
            SquareKind::Heart
        } else {
            SquareKind::Normal
        }
    }

    fn redirect(&self, square: u32) -> Option<u32> {
        self.ladders
            .get(&square)
            .or_else(|| self.snakes.get(&square))
            .copied()
    }
}
