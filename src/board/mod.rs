//! Board topology: square classification and shortcuts.
//!
//! Every layout implements `Topology`. The orchestrator only talks to the
//! trait, so layouts are interchangeable. `BoardLayout` is the serializable
//! choice made in `GameConfig`.

mod layouts;
mod square;
mod topology;

pub use layouts::{Grid, LadderSteps, SnakesAndLadders, MAX_GRID_SIDE};
pub use square::SquareKind;
pub use topology::{land, Landing, Topology};

use serde::{Deserialize, Serialize};

/// Which board to play on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum BoardLayout {
    /// Fifteen squares in five tiers.
    #[default]
    LadderSteps,
    /// Serpentine grid.
    Grid { columns: u32, rows: u32 },
    /// Classic 100-square snakes and ladders.
    SnakesAndLadders,
}

impl BoardLayout {
    /// Build the topology for this layout.
    #[must_use]
    pub fn build(&self) -> Box<dyn Topology> {
        match *self {
            BoardLayout::LadderSteps => Box::new(LadderSteps::new()),
            BoardLayout::Grid { columns, rows } => Box::new(Grid::new(columns, rows)),
            BoardLayout::SnakesAndLadders => Box::new(SnakesAndLadders::classic()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_build() {
        assert_eq!(BoardLayout::LadderSteps.build().last_square(), 14);
        assert_eq!(BoardLayout::Grid { columns: 5, rows: 5 }.build().last_square(), 24);
        assert_eq!(BoardLayout::SnakesAndLadders.build().last_square(), 100);
    }

    #[test]
    fn test_layout_serde() {
        let layout = BoardLayout::Grid { columns: 6, rows: 5 };
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(json, r#"{"kind":"grid","columns":6,"rows":5}"#);

        let back: BoardLayout = serde_json::from_str(r#"{"kind":"snakes_and_ladders"}"#).unwrap();
        assert_eq!(back, BoardLayout::SnakesAndLadders);
    }
}
