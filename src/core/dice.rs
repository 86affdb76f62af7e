//! Dice rolls.
//!
//! The ladder board was played with one die, the later boards with two.
//! `DiceMode` picks between them; a roll keeps every face so the
//! presentation layer can draw them and the reducer can detect doubles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::RandomSource;

/// Faces on each die.
pub const DIE_SIDES: u8 = 6;

/// How many dice are thrown per roll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiceMode {
    /// One die. Doubles never happen.
    Single,
    /// Two dice. Equal faces grant another roll.
    #[default]
    Pair,
}

impl DiceMode {
    /// Number of dice thrown.
    #[must_use]
    pub const fn dice_count(self) -> usize {
        match self {
            DiceMode::Single => 1,
            DiceMode::Pair => 2,
        }
    }
}

/// The faces of one roll.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    faces: SmallVec<[u8; 2]>,
}

impl DiceRoll {
    /// A single-die roll.
    #[must_use]
    pub fn single(face: u8) -> Self {
        Self {
            faces: SmallVec::from_slice(&[face]),
        }
    }

    /// A two-dice roll.
    #[must_use]
    pub fn pair(first: u8, second: u8) -> Self {
        Self {
            faces: SmallVec::from_slice(&[first, second]),
        }
    }

    /// Throw the dice for `mode`.
    pub fn throw(mode: DiceMode, rng: &mut impl RandomSource) -> Self {
        let faces = (0..mode.dice_count())
            .map(|_| rng.roll_die(DIE_SIDES))
            .collect();
        Self { faces }
    }

    /// Individual faces in throw order.
    #[must_use]
    pub fn faces(&self) -> &[u8] {
        &self.faces
    }

    /// Sum of all faces.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.faces.iter().map(|&f| u32::from(f)).sum()
    }

    /// Two dice showing the same face.
    #[must_use]
    pub fn is_double(&self) -> bool {
        matches!(self.faces.as_slice(), [a, b] if a == b)
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(|f| f.to_string()).collect();
        write!(f, "{} = {}", faces.join(" + "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRng;

    #[test]
    fn test_pair_total_and_double() {
        let roll = DiceRoll::pair(4, 4);
        assert_eq!(roll.total(), 8);
        assert!(roll.is_double());

        let roll = DiceRoll::pair(2, 5);
        assert_eq!(roll.total(), 7);
        assert!(!roll.is_double());
    }

    #[test]
    fn test_single_is_never_double() {
        let roll = DiceRoll::single(6);
        assert_eq!(roll.total(), 6);
        assert!(!roll.is_double());
        assert_eq!(roll.faces(), &[6]);
    }

    #[test]
    fn test_throw_uses_mode() {
        let mut rng = ScriptedRng::new().with_dice(&[3, 3, 5]);

        let pair = DiceRoll::throw(DiceMode::Pair, &mut rng);
        assert_eq!(pair.faces(), &[3, 3]);

        let single = DiceRoll::throw(DiceMode::Single, &mut rng);
        assert_eq!(single.faces(), &[5]);
    }

    #[test]
    fn test_display() {
        assert_eq!(DiceRoll::pair(1, 2).to_string(), "1 + 2 = 3");
    }
}
