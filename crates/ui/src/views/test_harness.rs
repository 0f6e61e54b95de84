use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::Catalog;
use quiz_core::model::Session;
use quiz_core::time::fixed_clock;
use services::QuizLoopService;

use crate::context::{DifficultyChoice, UiApp, build_app_context};
use crate::views::{CategoriesView, HomeView, QuizView, ResultsView};

const TEST_SHUFFLE_SEED: u64 = 42;

#[derive(Clone)]
struct TestApp {
    catalog: Arc<Catalog>,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Categories,
    Quiz(String),
    Results,
}

/// Lets a test drive the quiz category from outside the dom, to exercise
/// prop changes without remounting the view.
#[derive(Clone, Default)]
pub struct QuizCategoryHandles {
    set_category: Rc<RefCell<Option<Callback<String>>>>,
}

impl QuizCategoryHandles {
    pub fn register(&self, set_category: Callback<String>) {
        *self.set_category.borrow_mut() = Some(set_category);
    }

    pub fn set_category(&self) -> Callback<String> {
        (*self.set_category.borrow()).expect("quiz category setter registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    session: Option<Session>,
    quiz_handles: Option<QuizCategoryHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let quiz_loop = app.quiz_loop();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    let seeded = props.session.clone();
    use_context_provider(|| Signal::new(seeded.unwrap_or_else(|| quiz_loop.new_session())));
    use_context_provider(|| Signal::new(DifficultyChoice::default()));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Categories => rsx! { CategoriesView {} },
        ViewKind::Quiz(initial) => rsx! { QuizHost { initial } },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

#[component]
fn QuizHost(initial: String) -> Element {
    let mut category = use_signal(|| initial.clone());
    let set_category = use_callback(move |value: String| category.set(value));
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        if let Some(handles) = try_consume_context::<QuizCategoryHandles>() {
            handles.register(set_category);
        }
    }
    rsx! { QuizView { category } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_quiz_loop() -> Arc<QuizLoopService> {
    Arc::new(
        QuizLoopService::new(fixed_clock(), Arc::new(Catalog::builtin()))
            .with_shuffle_seed(Some(TEST_SHUFFLE_SEED)),
    )
}

pub fn setup_view_harness(view: ViewKind, session: Option<Session>) -> ViewHarness {
    setup_view_harness_with_quiz_handles(view, session, None)
}

pub fn setup_view_harness_with_quiz_handles(
    view: ViewKind,
    session: Option<Session>,
    quiz_handles: Option<QuizCategoryHandles>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        catalog: Arc::new(Catalog::builtin()),
        quiz_loop: test_quiz_loop(),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            session,
            quiz_handles,
        },
    );

    ViewHarness { dom }
}
