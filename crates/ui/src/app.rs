use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{AppContext, DifficultyChoice};
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();

    // The one mutable Session for this process. Views receive it as a signal
    // handle; all writes happen on the UI thread.
    use_context_provider(|| Signal::new(quiz_loop.new_session()));
    use_context_provider(|| Signal::new(DifficultyChoice::default()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Quiz99" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
