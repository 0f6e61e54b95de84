mod ids;
mod question;
mod session;
mod summary;

pub use ids::{CategoryId, QuestionId};
pub use question::{Category, Difficulty, ParseDifficultyError, Question, QuestionError};
pub use session::{QuizResult, Session, SessionProgress, SessionState};
pub use summary::ScoreSummary;
