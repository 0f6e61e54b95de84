use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CategoriesView, HomeView, QuizView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/categories", CategoriesView)] Categories {},
        #[route("/quiz/:category", QuizView)] Quiz { category: String },
        #[route("/results", ResultsView)] Results {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            Link { class: "navbar__brand", to: Route::Home {},
                span { class: "navbar__logo", "🧠" }
                span { class: "navbar__name", "Quiz99" }
            }
            ul { class: "navbar__links",
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Categories {}, "Categories" } }
                li { Link { to: Route::Results {}, "Results" } }
            }
        }
    }
}
