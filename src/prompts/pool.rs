//! Static prompt pool with per-category draws.

use rustc_hash::FxHashMap;

use super::prompt::{Prompt, PromptCategory};
use crate::board::Topology;
use crate::core::RandomSource;
use crate::error::{GameError, GameResult};

/// Immutable prompt list indexed by category.
#[derive(Clone, Debug)]
pub struct PromptPool {
    prompts: Vec<Prompt>,
    by_category: FxHashMap<PromptCategory, Vec<usize>>,
}

impl PromptPool {
    /// Build a pool from a prompt list.
    #[must_use]
    pub fn new(prompts: Vec<Prompt>) -> Self {
        let mut by_category: FxHashMap<PromptCategory, Vec<usize>> = FxHashMap::default();
        for (index, prompt) in prompts.iter().enumerate() {
            by_category.entry(prompt.category).or_default().push(index);
        }
        Self {
            prompts,
            by_category,
        }
    }

    /// The stock deck: 15 normal, 8 praise and 8 heart prompts.
    #[must_use]
    pub fn standard() -> Self {
        let prompts = STANDARD_PROMPTS
            .iter()
            .map(|&(id, text, category)| Prompt::new(id, text, category))
            .collect();
        Self::new(prompts)
    }

    /// Total prompts in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// True if the pool holds no prompts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Number of prompts in a category.
    #[must_use]
    pub fn count(&self, category: PromptCategory) -> usize {
        self.by_category.get(&category).map_or(0, Vec::len)
    }

    /// Iterate over the prompts of one category in declaration order.
    pub fn iter_category(&self, category: PromptCategory) -> impl Iterator<Item = &Prompt> {
        self.by_category
            .get(&category)
            .into_iter()
            .flatten()
            .map(move |&index| &self.prompts[index])
    }

    /// Find a prompt by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    /// Draw a prompt of `category` uniformly at random.
    ///
    /// An empty category is a content defect and is reported as
    /// `GameError::EmptyPromptPool`.
    pub fn draw(&self, category: PromptCategory, rng: &mut impl RandomSource) -> GameResult<&Prompt> {
        let indices = self
            .by_category
            .get(&category)
            .filter(|indices| !indices.is_empty())
            .ok_or(GameError::EmptyPromptPool(category))?;

        let index = indices[rng.pick_index(indices.len())];
        Ok(&self.prompts[index])
    }

    /// Check that every square a player can come to rest on has prompts.
    ///
    /// Squares that redirect are judged by their destination.
    pub fn covers(&self, board: &dyn Topology) -> GameResult<()> {
        for square in 0..=board.last_square() {
            let resting = board.redirect(square).unwrap_or(square);
            if let Some(category) = board.classify(resting).prompt_category() {
                if self.count(category) == 0 {
                    return Err(GameError::EmptyPromptPool(category));
                }
            }
        }
        Ok(())
    }
}

impl Default for PromptPool {
    fn default() -> Self {
        Self::standard()
    }
}

const STANDARD_PROMPTS: &[(&str, &str, PromptCategory)] = &[
    ("normal_1", "When was the happiest moment of your day?", PromptCategory::Normal),
    ("normal_2", "What was your favourite game as a child?", PromptCategory::Normal),
    ("normal_3", "What would you most like to be doing right now?", PromptCategory::Normal),
    ("normal_4", "Is there a place you would like to visit with your family?", PromptCategory::Normal),
    ("normal_5", "Is there a new hobby you would like to start?", PromptCategory::Normal),
    ("normal_6", "Which food makes you happiest?", PromptCategory::Normal),
    ("normal_7", "How do you shake off stress?", PromptCategory::Normal),
    ("normal_8", "What is the most memorable birthday present you have received?", PromptCategory::Normal),
    ("normal_9", "What is the strangest dream you remember?", PromptCategory::Normal),
    ("normal_10", "What is your favourite time of day?", PromptCategory::Normal),
    ("normal_11", "What kind of weather puts you in the best mood?", PromptCategory::Normal),
    ("normal_12", "Tell us your favourite season and why.", PromptCategory::Normal),
    ("normal_13", "What is the most fun thing to do with friends?", PromptCategory::Normal),
    ("normal_14", "Which colour cheers you up?", PromptCategory::Normal),
    ("normal_15", "Share your most treasured family memory.", PromptCategory::Normal),
    ("praise_1", "Tell the person on your left what is wonderful about them.", PromptCategory::Praise),
    ("praise_2", "Praise something the person on your right is good at.", PromptCategory::Praise),
    ("praise_3", "Compliment the person here with the brightest smile.", PromptCategory::Praise),
    ("praise_4", "Give everyone a different compliment.", PromptCategory::Praise),
    ("praise_5", "Thank the person you think is the kindest.", PromptCategory::Praise),
    ("praise_6", "Praise the person here with the most admirable strength.", PromptCategory::Praise),
    ("praise_7", "Praise the wisdom of the oldest person here.", PromptCategory::Praise),
    ("praise_8", "Praise the bright energy of the youngest person here.", PromptCategory::Praise),
    ("heart_1", "Why does this moment make you happy?", PromptCategory::Heart),
    ("heart_2", "What are you most grateful for about the people here?", PromptCategory::Heart),
    ("heart_3", "Who do you most want to say \"I love you\" to?", PromptCategory::Heart),
    ("heart_4", "Say \"thank you\" to everyone here.", PromptCategory::Heart),
    ("heart_5", "Share a precious memory you keep close to your heart.", PromptCategory::Heart),
    ("heart_6", "When do you feel most loved?", PromptCategory::Heart),
    ("heart_7", "Say something warm to everyone here.", PromptCategory::Heart),
    ("heart_8", "Tell us what makes your heart feel warm.", PromptCategory::Heart),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{LadderSteps, SnakesAndLadders};
    use crate::core::{GameRng, ScriptedRng};

    #[test]
    fn test_standard_counts() {
        let pool = PromptPool::standard();

        assert_eq!(pool.len(), 31);
        assert_eq!(pool.count(PromptCategory::Normal), 15);
        assert_eq!(pool.count(PromptCategory::Praise), 8);
        assert_eq!(pool.count(PromptCategory::Heart), 8);
    }

    #[test]
    fn test_ids_match_category() {
        let pool = PromptPool::standard();

        for category in PromptCategory::ALL {
            for prompt in pool.iter_category(category) {
                assert!(prompt.id.starts_with(category.name()), "{} in {}", prompt.id, category);
            }
        }
    }

    #[test]
    fn test_draw_filters_category() {
        let pool = PromptPool::standard();
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            let prompt = pool.draw(PromptCategory::Heart, &mut rng).unwrap();
            assert_eq!(prompt.category, PromptCategory::Heart);
        }
    }

    #[test]
    fn test_draw_uses_rng_pick() {
        let pool = PromptPool::standard();
        let mut rng = ScriptedRng::new().with_picks(&[2]);

        let prompt = pool.draw(PromptCategory::Praise, &mut rng).unwrap();
        assert_eq!(prompt.id, "praise_3");
    }

    #[test]
    fn test_draw_empty_category() {
        let pool = PromptPool::new(vec![Prompt::new("n", "hi", PromptCategory::Normal)]);
        let mut rng = GameRng::new(1);

        let err = pool.draw(PromptCategory::Heart, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::EmptyPromptPool(PromptCategory::Heart)));
    }

    #[test]
    fn test_standard_covers_boards() {
        let pool = PromptPool::standard();

        assert!(pool.covers(&LadderSteps::new()).is_ok());
        assert!(pool.covers(&SnakesAndLadders::classic()).is_ok());
    }

    #[test]
    fn test_covers_detects_missing_category() {
        let pool = PromptPool::new(vec![
            Prompt::new("n", "hi", PromptCategory::Normal),
            Prompt::new("h", "hug", PromptCategory::Heart),
        ]);

        let err = pool.covers(&LadderSteps::new()).unwrap_err();
        assert!(matches!(err, GameError::EmptyPromptPool(PromptCategory::Praise)));
    }

    #[test]
    fn test_get_by_id() {
        let pool = PromptPool::standard();
        assert_eq!(pool.get("heart_8").map(|p| p.category), Some(PromptCategory::Heart));
        assert!(pool.get("missing").is_none());
    }
}
