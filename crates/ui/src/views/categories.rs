use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::Difficulty;

use crate::context::{AppContext, DifficultyChoice};
use crate::routes::Route;

const DIFFICULTY_CHOICES: [(Option<Difficulty>, &str); 4] = [
    (None, "Any"),
    (Some(Difficulty::Easy), "Easy"),
    (Some(Difficulty::Medium), "Medium"),
    (Some(Difficulty::Hard), "Hard"),
];

#[component]
pub fn CategoriesView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut difficulty = use_context::<Signal<DifficultyChoice>>();
    let catalog = ctx.catalog();

    let difficulty_buttons = DIFFICULTY_CHOICES.iter().map(|&(choice, label)| {
        let active = difficulty.read().0 == choice;
        let class = if active {
            "difficulty-pill difficulty-pill--active"
        } else {
            "difficulty-pill"
        };
        rsx! {
            button {
                class: "{class}",
                r#type: "button",
                onclick: move |_| difficulty.set(DifficultyChoice(choice)),
                "{label}"
            }
        }
    });

    let category_cards = catalog.categories().iter().map(|category| {
        let nav = navigator;
        let id = category.id.clone();
        let count = catalog
            .questions()
            .iter()
            .filter(|question| question.category() == &category.id)
            .count();
        rsx! {
            button {
                class: "category-card",
                r#type: "button",
                style: "border-color: {category.color}",
                onclick: move |_| {
                    let _ = nav.push(Route::Quiz {
                        category: id.as_str().to_string(),
                    });
                },
                span { class: "category-card__icon", "{category.icon}" }
                h3 { class: "category-card__name", "{category.name}" }
                p { class: "category-card__description", "{category.description}" }
                span { class: "category-card__count", "{count} questions" }
            }
        }
    });

    rsx! {
        div { class: "page categories-page",
            header { class: "view-header",
                h2 { class: "view-title", "Choose a Category" }
                p { class: "view-subtitle", "Pick a difficulty, then a category to start." }
            }
            div { class: "difficulty-row",
                span { class: "difficulty-row__label", "Difficulty:" }
                {difficulty_buttons}
            }
            div { class: "category-grid",
                {category_cards}
            }
        }
    }
}
