use std::sync::Arc;

use quiz_core::Catalog;
use quiz_core::model::{CategoryId, Difficulty, SessionState};
use quiz_core::time::fixed_clock;
use services::{QuizError, QuizLoopService};

fn quiz_loop() -> QuizLoopService {
    QuizLoopService::new(fixed_clock(), Arc::new(Catalog::builtin())).with_shuffle_seed(Some(7))
}

#[test]
fn full_quiz_run_produces_one_result_per_question() {
    let loop_svc = quiz_loop();
    let mut session = loop_svc.new_session();
    loop_svc
        .start_quiz(&mut session, CategoryId::new("technology"), None, Some(4))
        .unwrap();
    let total = session.total_questions();
    assert!(total > 0);

    while !session.is_complete() {
        session.set_selection(Some(0));
        let answer = loop_svc.answer_current(&mut session, 1_500).unwrap();
        assert_eq!(
            answer.is_last,
            session.position() + 1 == total,
            "is_last must track the cursor"
        );
        loop_svc.advance(&mut session);
    }

    assert_eq!(session.state(), SessionState::Completed);
    assert_eq!(session.results().len(), total);
    let score = session.score();
    assert_eq!(score.total, total);
    assert_eq!(score.average_ms, 1_500);
}

#[test]
fn timed_out_question_scores_incorrect() {
    let loop_svc = quiz_loop();
    let mut session = loop_svc.new_session();
    loop_svc
        .start_quiz(&mut session, CategoryId::new("history"), None, Some(1))
        .unwrap();

    // No selection was made before the deadline.
    let answer = loop_svc.answer_current(&mut session, 30_000).unwrap();
    assert!(!answer.result.is_correct);
    assert_eq!(answer.result.selected, None);
}

#[test]
fn restart_after_completion_swaps_in_a_fresh_run() {
    let loop_svc = quiz_loop();
    let mut session = loop_svc.new_session();
    loop_svc
        .start_quiz(
            &mut session,
            CategoryId::new("science"),
            Some(Difficulty::Easy),
            None,
        )
        .unwrap();
    while !session.is_complete() {
        loop_svc.answer_current(&mut session, 900).unwrap();
        loop_svc.advance(&mut session);
    }
    assert_eq!(
        loop_svc.answer_current(&mut session, 900),
        Err(QuizError::Completed)
    );

    loop_svc
        .start_quiz(&mut session, CategoryId::new("science"), None, Some(2))
        .unwrap();
    assert_eq!(session.state(), SessionState::InProgress);
    assert!(session.results().is_empty());
    assert_eq!(session.position(), 0);
}

#[test]
fn impossible_filter_reports_empty() {
    let loop_svc = quiz_loop();
    let mut session = loop_svc.new_session();
    let err = loop_svc
        .start_quiz(&mut session, CategoryId::new("music"), None, None)
        .unwrap_err();
    assert_eq!(err, QuizError::Empty);
    assert_eq!(session.state(), SessionState::Idle);
}
