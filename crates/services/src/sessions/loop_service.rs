use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::model::{CategoryId, Difficulty, QuizResult, Session};
use quiz_core::{Catalog, Clock};

use super::picker::{PickFilter, QuestionPicker};
use crate::error::QuizError;

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswer {
    pub result: QuizResult,
    /// True when this was the last question; the next `advance` completes
    /// the session.
    pub is_last: bool,
}

/// Orchestrates quiz start and answering on top of the session store.
///
/// The store itself is a fail-soft primitive; this layer adds the rules the
/// UI relies on: a non-empty question set at start, no answering a finished
/// quiz, and at most one submission per question.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    catalog: Arc<Catalog>,
    shuffle_seed: Option<u64>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<Catalog>) -> Self {
        Self {
            clock,
            catalog,
            shuffle_seed: None,
        }
    }

    /// Pin the shuffle to a seed, for deterministic runs.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: Option<u64>) -> Self {
        self.shuffle_seed = seed;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A fresh idle session stamped by this service's clock.
    #[must_use]
    pub fn new_session(&self) -> Session {
        Session::new(self.clock.now())
    }

    /// Select questions for the given category/difficulty and (re)start the
    /// session with them.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` when nothing in the catalog matches, so
    /// the UI can show an empty state instead of a zero-question quiz.
    pub fn start_quiz(
        &self,
        session: &mut Session,
        category: CategoryId,
        difficulty: Option<Difficulty>,
        limit: Option<usize>,
    ) -> Result<(), QuizError> {
        let filter = PickFilter::new(category.clone())
            .with_difficulty(difficulty)
            .with_limit(limit);
        let questions = match self.shuffle_seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                QuestionPicker::pick_with(&self.catalog, &filter, &mut rng)
            }
            None => QuestionPicker::pick(&self.catalog, &filter),
        };

        if questions.is_empty() {
            return Err(QuizError::Empty);
        }

        let now = self.clock.now();
        session.configure(category, difficulty, now);
        session.initialize(questions, now);
        Ok(())
    }

    /// Score the pending selection for the current question.
    ///
    /// Uses the session's stored selection (`None` counts as no answer, e.g.
    /// on timeout) and records one result. Does not advance; the caller
    /// reveals the answer first and advances explicitly.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` on a finished session, `QuizError::Empty`
    /// on an idle one, and `QuizError::AlreadyAnswered` when the current
    /// position already has a result.
    pub fn answer_current(
        &self,
        session: &mut Session,
        elapsed_ms: u64,
    ) -> Result<QuizAnswer, QuizError> {
        if session.is_complete() {
            return Err(QuizError::Completed);
        }
        let Some(question) = session.current_question() else {
            return Err(QuizError::Empty);
        };
        if session.answered_count() > session.position() {
            return Err(QuizError::AlreadyAnswered);
        }

        let question_id = question.id().clone();
        let selected = session.selection();
        let result = session
            .submit_answer(&question_id, selected, elapsed_ms)
            .clone();

        Ok(QuizAnswer {
            result,
            is_last: session.position() + 1 == session.total_questions(),
        })
    }

    /// Step to the next question or complete the session.
    pub fn advance(&self, session: &mut Session) {
        session.advance();
    }
}
