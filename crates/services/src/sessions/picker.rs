use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::Catalog;
use quiz_core::model::{CategoryId, Difficulty, Question};

/// Selection criteria for picking questions out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickFilter {
    pub category: CategoryId,
    pub difficulty: Option<Difficulty>,
    pub limit: Option<usize>,
}

impl PickFilter {
    #[must_use]
    pub fn new(category: CategoryId) -> Self {
        Self {
            category,
            difficulty: None,
            limit: None,
        }
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// Picks a randomized question set for one quiz run.
///
/// Pure apart from the RNG, which is injected so tests can seed it.
pub struct QuestionPicker;

impl QuestionPicker {
    /// Pick questions using the thread RNG.
    #[must_use]
    pub fn pick(catalog: &Catalog, filter: &PickFilter) -> Vec<Question> {
        let mut rng = rng();
        Self::pick_with(catalog, filter, &mut rng)
    }

    /// Pick questions using the given RNG.
    ///
    /// Filters the catalog to exact category matches (and exact difficulty,
    /// if set), uniformly shuffles the result, then truncates to `limit` if
    /// set. A filter that matches nothing yields an empty vec, not an error;
    /// a limit larger than the match count returns everything that matched.
    #[must_use]
    pub fn pick_with<R: Rng + ?Sized>(
        catalog: &Catalog,
        filter: &PickFilter,
        rng: &mut R,
    ) -> Vec<Question> {
        let mut matched: Vec<Question> = catalog
            .questions()
            .iter()
            .filter(|question| question.category() == &filter.category)
            .filter(|question| {
                filter
                    .difficulty
                    .is_none_or(|difficulty| question.difficulty() == difficulty)
            })
            .cloned()
            .collect();

        matched.as_mut_slice().shuffle(rng);

        if let Some(limit) = filter.limit {
            matched.truncate(limit);
        }
        matched
    }
}
