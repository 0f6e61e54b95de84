mod categories;
mod home;
mod quiz;
mod results;

pub use categories::CategoriesView;
pub use home::HomeView;
pub use quiz::QuizView;
pub use results::ResultsView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
