use quiz_core::model::{CategoryId, Session};

use super::test_harness::{
    QuizCategoryHandles, ViewKind, setup_view_harness, setup_view_harness_with_quiz_handles,
    test_quiz_loop,
};

fn completed_session() -> Session {
    let quiz_loop = test_quiz_loop();
    let mut session = quiz_loop.new_session();
    quiz_loop
        .start_quiz(&mut session, CategoryId::new("science"), None, Some(3))
        .expect("science questions exist");
    while !session.is_complete() {
        session.set_selection(Some(0));
        quiz_loop
            .answer_current(&mut session, 1_200)
            .expect("answer current question");
        quiz_loop.advance(&mut session);
    }
    session
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_catalog_stats() {
    let mut harness = setup_view_harness(ViewKind::Home, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome to Quiz99"), "missing hero in {html}");
    assert!(html.contains("Questions"), "missing stats in {html}");
    assert!(html.contains("30s"), "missing timer stat in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn categories_view_smoke_renders_all_categories() {
    let mut harness = setup_view_harness(ViewKind::Categories, None);
    harness.rebuild();
    let html = harness.render();
    for name in ["General Knowledge", "Science", "Technology", "History"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
    assert!(html.contains("Difficulty:"), "missing difficulty row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_starts_and_shows_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz("science".to_string()), None);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 1 of"), "missing progress in {html}");
    assert!(html.contains("Submit Answer"), "missing submit button in {html}");
    assert!(html.contains("Science"), "missing category label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_restarts_when_category_changes_without_remount() {
    let handles = QuizCategoryHandles::default();
    let mut harness = setup_view_harness_with_quiz_handles(
        ViewKind::Quiz("science".to_string()),
        None,
        Some(handles.clone()),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Science"), "missing first category in {html}");

    handles.set_category().call("history".to_string());
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("History"), "quiz did not restart in {html}");
    assert!(html.contains("Question 1 of"), "cursor not reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_unknown_category_shows_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Quiz("does-not-exist".to_string()), None);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Nothing to quiz on"),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_empty_session_shows_placeholder() {
    let mut harness = setup_view_harness(ViewKind::Results, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No Results Yet"), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_score_and_breakdown() {
    let session = completed_session();
    let score = session.score();
    let mut harness = setup_view_harness(ViewKind::Results, Some(session));
    harness.rebuild();
    let html = harness.render();
    let percent = format!("{}%", score.percent);
    assert!(html.contains(&percent), "missing {percent} in {html}");
    assert!(html.contains(score.message()), "missing message in {html}");
    assert!(html.contains("Answer Breakdown"), "missing breakdown in {html}");
    assert!(html.contains("Retake Quiz"), "missing retake button in {html}");
}
