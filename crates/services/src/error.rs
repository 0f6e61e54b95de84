//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the quiz loop service.
///
/// The session store itself is fail-soft; these are the stricter rules the
/// orchestrating layer adds on top.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for this selection")]
    Empty,
    #[error("quiz already completed")]
    Completed,
    #[error("current question already answered")]
    AlreadyAnswered,
}
