use std::sync::Arc;

use quiz_core::Catalog;
use quiz_core::model::Difficulty;
use services::QuizLoopService;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

/// The difficulty picked on the categories page, carried across routes.
///
/// `None` means "any difficulty".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DifficultyChoice(pub Option<Difficulty>);

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            quiz_loop: app.quiz_loop(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
