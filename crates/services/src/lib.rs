#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use error::QuizError;
pub use sessions::{
    Countdown, CountdownTick, PickFilter, QUESTION_TIME_LIMIT_SECS, QuestionPicker, QuizAnswer,
    QuizLoopService,
};
