use std::time::Instant;

use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::{CategoryId, Question, Session};
use services::{Countdown, CountdownTick, QuizError};

use crate::context::{AppContext, DifficultyChoice};
use crate::routes::Route;
use crate::vm::{QuizIntent, QuizOutcome, QuizPhase, QuizVm, format_remaining};

/// How many questions one quiz run draws from the matching pool.
const QUESTIONS_PER_QUIZ: usize = 5;

/// Seconds left at which the timer badge switches to the warning style.
const TIMER_WARNING_SECS: u32 = 10;

#[component]
pub fn QuizView(category: ReadOnlySignal<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();
    let catalog = ctx.catalog();
    let mut session = use_context::<Signal<Session>>();
    let difficulty = use_context::<Signal<DifficultyChoice>>();

    let mut vm = use_signal(QuizVm::new);
    let mut countdown = use_signal(Countdown::for_question);
    let mut timer_task = use_signal(|| None::<Task>);
    let mut question_started = use_signal(Instant::now);
    let mut start_error = use_signal(|| None::<QuizError>);

    // Start (or restart) the quiz for this route's category. The tracked
    // read of `category` restarts the run if the route swaps categories
    // without remounting the view.
    {
        let quiz_loop = quiz_loop.clone();
        use_effect(move || {
            let category_id = CategoryId::new(category.read().clone());
            let chosen_difficulty = difficulty.peek().0;
            let outcome = quiz_loop.start_quiz(
                &mut session.write(),
                category_id,
                chosen_difficulty,
                Some(QUESTIONS_PER_QUIZ),
            );
            vm.set(QuizVm::new());
            match outcome {
                Ok(()) => start_error.set(None),
                Err(err) => start_error.set(Some(err)),
            }
        });
    }

    let dispatch = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |intent: QuizIntent| match intent {
            QuizIntent::Select(index) => {
                let vm_value = *vm.peek();
                vm_value.select(&mut session.write(), index);
            }
            QuizIntent::Submit => {
                if vm.peek().phase() == QuizPhase::Reveal {
                    return;
                }
                if let Some(task) = timer_task.write().take() {
                    task.cancel();
                }
                let elapsed_ms = u64::try_from(question_started.peek().elapsed().as_millis())
                    .unwrap_or(u64::MAX);
                let mut vm_value = *vm.peek();
                // Errors here mean the session is idle or already scored;
                // the view falls back to its empty state either way.
                let _ = vm_value.submit(&quiz_loop, &mut session.write(), elapsed_ms);
                vm.set(vm_value);
            }
            QuizIntent::Next => {
                let mut vm_value = *vm.peek();
                let outcome = vm_value.next(&quiz_loop, &mut session.write());
                vm.set(vm_value);
                if outcome == QuizOutcome::Completed {
                    if let Some(task) = timer_task.write().take() {
                        task.cancel();
                    }
                    let _ = navigator.push(Route::Results {});
                }
            }
        })
    };

    // The countdown restarts whenever the question under the cursor changes.
    // A memo keyed on the question id keeps selection writes from resetting it.
    let current_question_id = use_memo(move || {
        session
            .read()
            .current_question()
            .map(|question| question.id().clone())
    });
    use_effect(move || {
        if let Some(task) = timer_task.write().take() {
            task.cancel();
        }
        if current_question_id.read().is_none() {
            return;
        }
        if vm.peek().phase() != QuizPhase::Answering {
            return;
        }
        countdown.set(Countdown::for_question());
        question_started.set(Instant::now());
        let task = spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
            interval.tick().await;
            loop {
                interval.tick().await;
                let tick = countdown.write().tick();
                if tick == CountdownTick::Expired {
                    dispatch.call(QuizIntent::Submit);
                    break;
                }
            }
        });
        timer_task.set(Some(task));
    });

    if let Some(err) = *start_error.read() {
        let message = match err {
            QuizError::Empty => "No questions match this category and difficulty yet.",
            _ => "Could not start the quiz.",
        };
        return rsx! {
            div { class: "page quiz-page",
                div { class: "empty-state",
                    span { class: "empty-state__icon", "🤔" }
                    h2 { "Nothing to quiz on" }
                    p { "{message}" }
                    Link { class: "btn btn-primary", to: Route::Categories {}, "Back to Categories" }
                }
            }
        };
    }

    let session_guard = session.read();
    let Some(question) = session_guard.current_question().cloned() else {
        return rsx! {
            div { class: "page quiz-page",
                p { class: "quiz-loading", "Loading quiz..." }
            }
        };
    };
    let position = session_guard.position();
    let total = session_guard.total_questions();
    let selection = session_guard.selection();
    let score = session_guard.score();
    drop(session_guard);

    let phase = vm.read().phase();
    let revealed = phase == QuizPhase::Reveal;
    let remaining = countdown.read().remaining();
    let category_name = catalog
        .category(question.category())
        .map_or_else(|| category.read().clone(), |category| category.name.clone());
    let progress_percent = (position * 100) / total.max(1);
    let timer_class = if remaining <= TIMER_WARNING_SECS {
        "quiz-timer quiz-timer--warning"
    } else {
        "quiz-timer"
    };
    let is_last = position + 1 == total;
    let next_label = if is_last { "Finish Quiz" } else { "Next Question" };

    let options = question.options().iter().enumerate().map(|(index, text)| {
        let text = text.clone();
        let mut class = String::from("option");
        if revealed {
            if index == question.correct_answer() {
                class.push_str(" option--correct");
            } else if selection == Some(index) {
                class.push_str(" option--incorrect");
            }
        } else if selection == Some(index) {
            class.push_str(" option--selected");
        }
        rsx! {
            button {
                class: "{class}",
                r#type: "button",
                disabled: revealed,
                onclick: move |_| dispatch.call(QuizIntent::Select(index)),
                span { class: "option__letter", {option_letter(index)} }
                span { class: "option__text", "{text}" }
            }
        }
    });

    rsx! {
        div { class: "page quiz-page",
            header { class: "quiz-header",
                div { class: "quiz-progress",
                    span { class: "quiz-progress__label", "Question {position + 1} of {total}" }
                    div { class: "quiz-progress__track",
                        div {
                            class: "quiz-progress__fill",
                            style: "width: {progress_percent}%",
                        }
                    }
                }
                span { class: "{timer_class}", "⏱ {format_remaining(remaining)}" }
            }
            div { class: "quiz-meta",
                span { class: "quiz-meta__category", "{category_name}" }
                span { class: "quiz-meta__difficulty quiz-meta__difficulty--{question.difficulty().as_str()}",
                    "{question.difficulty().label()}"
                }
            }
            h2 { class: "quiz-prompt", "{question.prompt()}" }
            div { class: "quiz-options",
                {options}
            }
            if revealed {
                RevealPanel { question: question.clone(), selection }
            }
            div { class: "quiz-actions",
                if revealed {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Next),
                        "{next_label}"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: selection.is_none(),
                        onclick: move |_| dispatch.call(QuizIntent::Submit),
                        "Submit Answer"
                    }
                }
            }
            footer { class: "quiz-score",
                span { "Score: {score.correct}/{score.total}" }
            }
        }
    }
}

#[component]
fn RevealPanel(question: Question, selection: Option<usize>) -> Element {
    let correct = question.scores_correct(selection);
    let (banner_class, banner_text) = if correct {
        ("reveal reveal--correct", "Correct!")
    } else if selection.is_none() {
        ("reveal reveal--timeout", "Time's up!")
    } else {
        ("reveal reveal--incorrect", "Incorrect")
    };
    rsx! {
        div { class: "{banner_class}",
            p { class: "reveal__banner", "{banner_text}" }
            if let Some(explanation) = question.explanation() {
                p { class: "reveal__explanation", "{explanation}" }
            }
        }
    }
}

fn option_letter(index: usize) -> String {
    char::from_u32(u32::try_from(index % 26).unwrap_or(0) + u32::from('A'))
        .map_or_else(String::new, |letter| letter.to_string())
}
