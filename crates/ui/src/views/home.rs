use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let question_count = catalog.questions().len();
    let category_count = catalog.categories().len();

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h2 { class: "hero__title", "Welcome to Quiz99" }
                p { class: "hero__subtitle",
                    "Test your knowledge across categories. Beat the clock, learn from every answer."
                }
                div { class: "hero__actions",
                    Link { class: "btn btn-primary", to: Route::Categories {}, "Start Quiz" }
                    Link { class: "btn btn-secondary", to: Route::Results {}, "View Results" }
                }
            }
            section { class: "feature-grid",
                div { class: "feature-card",
                    span { class: "feature-card__icon", "📂" }
                    h3 { "Multiple Categories" }
                    p { "From general knowledge to technology, pick the topics you care about." }
                }
                div { class: "feature-card",
                    span { class: "feature-card__icon", "🎚️" }
                    h3 { "Difficulty Levels" }
                    p { "Choose easy, medium, or hard questions, or mix them all." }
                }
                div { class: "feature-card",
                    span { class: "feature-card__icon", "📈" }
                    h3 { "Track Progress" }
                    p { "See your score, accuracy, and answer times after every quiz." }
                }
                div { class: "feature-card",
                    span { class: "feature-card__icon", "💡" }
                    h3 { "Learn & Improve" }
                    p { "Every question comes with an explanation of the right answer." }
                }
            }
            section { class: "stats-row",
                div { class: "stat",
                    span { class: "stat__value", "{question_count}" }
                    span { class: "stat__label", "Questions" }
                }
                div { class: "stat",
                    span { class: "stat__value", "{category_count}" }
                    span { class: "stat__label", "Categories" }
                }
                div { class: "stat",
                    span { class: "stat__value", "30s" }
                    span { class: "stat__label", "Per Question" }
                }
            }
        }
    }
}
