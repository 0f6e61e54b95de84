use chrono::{DateTime, Utc};

use crate::model::ids::{CategoryId, QuestionId};
use crate::model::question::{Difficulty, Question};
use crate::model::summary::ScoreSummary;

//
// ─── QUIZ RESULT ───────────────────────────────────────────────────────────────
//

/// Recorded outcome of answering one question within a session.
///
/// Created exactly once per question at submission time and immutable
/// thereafter. `selected` is `None` when the timer forced a submit with no
/// pending answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub question_id: QuestionId,
    pub selected: Option<usize>,
    pub is_correct: bool,
    pub elapsed_ms: u64,
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Coarse state of a [`Session`], derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No questions loaded.
    Idle,
    /// Questions loaded, not yet completed.
    InProgress,
    /// Terminal state; only `reset` leaves it.
    Completed,
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One quiz run: its question list, cursor, pending selection, and the
/// results recorded so far.
///
/// All operations are total. Malformed input degrades softly (a lookup miss
/// scores as incorrect, `advance` on an empty session is a no-op) instead of
/// erroring; this store is a narrow primitive and stricter rules such as
/// "answer each question at most once" live in the orchestrating layer.
///
/// Single writer only. The session is owned by whichever controller drives
/// the quiz flow and must be confined to one thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    questions: Vec<Question>,
    position: usize,
    selection: Option<usize>,
    results: Vec<QuizResult>,
    completed: bool,
    started_at: DateTime<Utc>,
    category: Option<CategoryId>,
    difficulty: Option<Difficulty>,
}

impl Session {
    /// A fresh, idle session.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            questions: Vec::new(),
            position: 0,
            selection: None,
            results: Vec::new(),
            completed: false,
            started_at,
            category: None,
            difficulty: None,
        }
    }

    /// Replace the question list and restart the run.
    ///
    /// Resets position, selection, results, and the completion flag, and
    /// records a new start timestamp. Callable at any time.
    pub fn initialize(&mut self, questions: Vec<Question>, now: DateTime<Utc>) {
        self.questions = questions;
        self.position = 0;
        self.selection = None;
        self.results.clear();
        self.completed = false;
        self.started_at = now;
    }

    /// Record the chosen category and difficulty and refresh the start
    /// timestamp. Independent of the question list.
    pub fn configure(
        &mut self,
        category: CategoryId,
        difficulty: Option<Difficulty>,
        now: DateTime<Utc>,
    ) {
        self.category = Some(category);
        self.difficulty = difficulty;
        self.started_at = now;
    }

    /// Set (or clear) the pending answer for the current question.
    ///
    /// Stores the value as-is; scoring happens in [`Session::submit_answer`].
    pub fn set_selection(&mut self, selection: Option<usize>) {
        self.selection = selection;
    }

    /// Score a submission and append its result.
    ///
    /// Correctness is computed against the question with the given id in the
    /// current list; an unknown id scores as incorrect rather than erroring.
    /// Does not advance the position, and does not deduplicate repeated
    /// submissions for the same question (caller contract: at most one per
    /// question).
    pub fn submit_answer(
        &mut self,
        question_id: &QuestionId,
        selected: Option<usize>,
        elapsed_ms: u64,
    ) -> &QuizResult {
        let is_correct = self
            .questions
            .iter()
            .find(|question| question.id() == question_id)
            .is_some_and(|question| question.scores_correct(selected));

        self.results.push(QuizResult {
            question_id: question_id.clone(),
            selected,
            is_correct,
            elapsed_ms,
        });

        // Push above guarantees a last element.
        &self.results[self.results.len() - 1]
    }

    /// Move to the next question, or complete the session at the last one.
    ///
    /// Before the last index: increments the position and clears the pending
    /// selection. At the last index: sets the completion flag and leaves the
    /// position unchanged. This is the sole transition into `Completed`.
    /// No-op on an idle or already completed session.
    pub fn advance(&mut self) {
        if self.questions.is_empty() || self.completed {
            return;
        }

        if self.position + 1 < self.questions.len() {
            self.position += 1;
            self.selection = None;
        } else {
            self.completed = true;
        }
    }

    /// Return the session to its ground state, clearing the question list
    /// and the category/difficulty tags.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.initialize(Vec::new(), now);
        self.category = None;
        self.difficulty = None;
    }

    // ─── Read access ───────────────────────────────────────────────────────

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    #[must_use]
    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn category(&self) -> Option<&CategoryId> {
        self.category.as_ref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// The question under the cursor, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions that already have a recorded result.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.questions.is_empty() {
            SessionState::Idle
        } else if self.completed {
            SessionState::Completed
        } else {
            SessionState::InProgress
        }
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.total_questions().saturating_sub(self.answered_count()),
            is_complete: self.completed,
        }
    }

    /// Aggregate score over the results recorded so far.
    #[must_use]
    pub fn score(&self) -> ScoreSummary {
        ScoreSummary::from_results(&self.results)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
