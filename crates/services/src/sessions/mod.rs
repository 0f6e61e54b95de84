mod countdown;
mod loop_service;
mod picker;

// Public API of the quiz session subsystem.
pub use crate::error::QuizError;
pub use countdown::{Countdown, CountdownTick, QUESTION_TIME_LIMIT_SECS};
pub use loop_service::{QuizAnswer, QuizLoopService};
pub use picker::{PickFilter, QuestionPicker};
