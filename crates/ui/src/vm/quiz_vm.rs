use quiz_core::model::Session;
use services::{QuizAnswer, QuizError, QuizLoopService};

/// User actions on the quiz page, dispatched through a single callback so
/// both buttons and the countdown task share one submit path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Submit,
    Next,
}

/// Where the current question is in its answer/reveal cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    /// Options are selectable; the countdown is running.
    Answering,
    /// The answer has been scored; correct option and explanation shown.
    Reveal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed,
}

/// Per-question presentation state layered over the shared [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizVm {
    phase: QuizPhase,
}

impl QuizVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: QuizPhase::Answering,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Store a pending selection. Ignored once the answer is revealed; the
    /// loop service backs this up by rejecting double submits.
    pub fn select(&self, session: &mut Session, index: usize) {
        if self.phase == QuizPhase::Answering {
            session.set_selection(Some(index));
        }
    }

    /// Score the pending selection and move to the reveal phase.
    ///
    /// # Errors
    ///
    /// Propagates `QuizError` from the loop service; the phase is unchanged
    /// on error.
    pub fn submit(
        &mut self,
        quiz_loop: &QuizLoopService,
        session: &mut Session,
        elapsed_ms: u64,
    ) -> Result<QuizAnswer, QuizError> {
        let answer = quiz_loop.answer_current(session, elapsed_ms)?;
        self.phase = QuizPhase::Reveal;
        Ok(answer)
    }

    /// Advance past the revealed question.
    pub fn next(&mut self, quiz_loop: &QuizLoopService, session: &mut Session) -> QuizOutcome {
        quiz_loop.advance(session);
        if session.is_complete() {
            QuizOutcome::Completed
        } else {
            self.phase = QuizPhase::Answering;
            QuizOutcome::Continue
        }
    }
}

impl Default for QuizVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::Catalog;
    use quiz_core::model::CategoryId;
    use quiz_core::time::fixed_clock;
    use std::sync::Arc;

    fn quiz_loop() -> QuizLoopService {
        QuizLoopService::new(fixed_clock(), Arc::new(Catalog::builtin()))
            .with_shuffle_seed(Some(1))
    }

    fn started_session(quiz_loop: &QuizLoopService) -> Session {
        let mut session = quiz_loop.new_session();
        quiz_loop
            .start_quiz(&mut session, CategoryId::new("science"), None, Some(2))
            .unwrap();
        session
    }

    #[test]
    fn select_only_while_answering() {
        let quiz_loop = quiz_loop();
        let mut session = started_session(&quiz_loop);
        let mut vm = QuizVm::new();

        vm.select(&mut session, 1);
        assert_eq!(session.selection(), Some(1));

        vm.submit(&quiz_loop, &mut session, 1_000).unwrap();
        assert_eq!(vm.phase(), QuizPhase::Reveal);

        vm.select(&mut session, 2);
        assert_eq!(session.selection(), Some(1), "selection locked after reveal");
    }

    #[test]
    fn submit_then_next_cycles_phases() {
        let quiz_loop = quiz_loop();
        let mut session = started_session(&quiz_loop);
        let mut vm = QuizVm::new();

        vm.select(&mut session, 0);
        let answer = vm.submit(&quiz_loop, &mut session, 800).unwrap();
        assert!(!answer.is_last);

        assert_eq!(vm.next(&quiz_loop, &mut session), QuizOutcome::Continue);
        assert_eq!(vm.phase(), QuizPhase::Answering);
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn next_after_last_question_completes() {
        let quiz_loop = quiz_loop();
        let mut session = started_session(&quiz_loop);
        let mut vm = QuizVm::new();

        vm.submit(&quiz_loop, &mut session, 500).unwrap();
        vm.next(&quiz_loop, &mut session);
        vm.submit(&quiz_loop, &mut session, 500).unwrap();

        assert_eq!(vm.next(&quiz_loop, &mut session), QuizOutcome::Completed);
        assert!(session.is_complete());
    }

    #[test]
    fn double_submit_keeps_reveal_phase_and_one_result() {
        let quiz_loop = quiz_loop();
        let mut session = started_session(&quiz_loop);
        let mut vm = QuizVm::new();

        vm.submit(&quiz_loop, &mut session, 500).unwrap();
        let err = vm.submit(&quiz_loop, &mut session, 900).unwrap_err();

        assert_eq!(err, QuizError::AlreadyAnswered);
        assert_eq!(vm.phase(), QuizPhase::Reveal);
        assert_eq!(session.results().len(), 1);
    }
}
