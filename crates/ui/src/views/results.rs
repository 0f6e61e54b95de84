use chrono::Utc;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::Session;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::format_elapsed_secs;

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();
    let mut session = use_context::<Signal<Session>>();

    let retake = use_callback(move |()| {
        let last_category = session.peek().category().cloned();
        session.write().reset(Utc::now());
        let route = match last_category {
            Some(id) => Route::Quiz {
                category: id.as_str().to_string(),
            },
            None => Route::Categories {},
        };
        let _ = navigator.push(route);
    });
    let new_category = use_callback(move |()| {
        session.write().reset(Utc::now());
        let _ = navigator.push(Route::Categories {});
    });

    let session_guard = session.read();
    if session_guard.results().is_empty() {
        return rsx! {
            div { class: "page results-page",
                div { class: "empty-state",
                    span { class: "empty-state__icon", "📋" }
                    h2 { "No Results Yet" }
                    p { "Finish a quiz to see your score and answer breakdown here." }
                    Link { class: "btn btn-primary", to: Route::Categories {}, "Start a Quiz" }
                }
            }
        };
    }

    let score = session_guard.score();
    let last_category = session_guard.category().cloned();
    let rows = session_guard
        .results()
        .iter()
        .map(|result| {
            let question = session_guard
                .questions()
                .iter()
                .find(|question| question.id() == &result.question_id)
                .or_else(|| catalog.question(&result.question_id));
            let prompt = question.map_or("(question removed)", |q| q.prompt()).to_string();
            let selected_text = match (result.selected, question) {
                (Some(index), Some(q)) => q
                    .options()
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| format!("Option {index}")),
                (Some(index), None) => format!("Option {index}"),
                (None, _) => "No answer".to_string(),
            };
            let correct_text = question
                .and_then(|q| q.options().get(q.correct_answer()).cloned())
                .unwrap_or_default();
            (
                prompt,
                selected_text,
                correct_text,
                result.is_correct,
                result.elapsed_ms,
            )
        })
        .collect::<Vec<_>>();
    drop(session_guard);

    let category_label = last_category
        .as_ref()
        .and_then(|id| catalog.category(id))
        .map(|category| category.name.clone());
    let breakdown = rows
        .into_iter()
        .map(|(prompt, selected_text, correct_text, is_correct, elapsed_ms)| {
            let (mark, row_class) = if is_correct {
                ("✓", "result-row result-row--correct")
            } else {
                ("✗", "result-row result-row--incorrect")
            };
            rsx! {
                div { class: "{row_class}",
                    span { class: "result-row__mark", "{mark}" }
                    div { class: "result-row__body",
                        p { class: "result-row__prompt", "{prompt}" }
                        p { class: "result-row__answer", "Your answer: {selected_text}" }
                        if !is_correct && !correct_text.is_empty() {
                            p { class: "result-row__correct", "Correct answer: {correct_text}" }
                        }
                    }
                    span { class: "result-row__time", {format_elapsed_secs(elapsed_ms)} }
                }
            }
        });

    rsx! {
        div { class: "page results-page",
            header { class: "view-header",
                h2 { class: "view-title", "Quiz Results" }
                if let Some(label) = category_label {
                    p { class: "view-subtitle", "{label}" }
                }
            }
            section { class: "score-card",
                span { class: "score-card__percent", "{score.percent}%" }
                p { class: "score-card__message", "{score.message()}" }
                div { class: "score-card__stats",
                    div { class: "stat",
                        span { class: "stat__value", "{score.correct}/{score.total}" }
                        span { class: "stat__label", "Correct" }
                    }
                    div { class: "stat",
                        span { class: "stat__value", "{score.average_secs()}s" }
                        span { class: "stat__label", "Avg. Time" }
                    }
                }
            }
            section { class: "results-breakdown",
                h3 { "Answer Breakdown" }
                {breakdown}
            }
            div { class: "results-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| retake.call(()),
                    "Retake Quiz"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| new_category.call(()),
                    "New Category"
                }
            }
        }
    }
}
