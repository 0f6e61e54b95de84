mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{QuizIntent, QuizOutcome, QuizPhase, QuizVm};
pub use time_fmt::{format_elapsed_secs, format_remaining};
