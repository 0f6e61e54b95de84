use crate::model::session::QuizResult;

/// Aggregate score over a list of quiz results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreSummary {
    pub total: usize,
    pub correct: usize,
    /// Share of correct answers, rounded to whole percent.
    pub percent: u32,
    /// Mean time per answered question, truncated to whole milliseconds.
    pub average_ms: u64,
}

impl ScoreSummary {
    /// Build a summary from recorded results. Empty input yields all zeros.
    #[must_use]
    pub fn from_results(results: &[QuizResult]) -> Self {
        let total = results.len();
        if total == 0 {
            return Self::default();
        }

        let correct = results.iter().filter(|result| result.is_correct).count();
        let total_ms: u64 = results.iter().map(|result| result.elapsed_ms).sum();

        let percent = u32::try_from((correct * 200 + total) / (total * 2)).unwrap_or(100);

        Self {
            total,
            correct,
            percent,
            average_ms: total_ms / total as u64,
        }
    }

    /// Average time rounded to whole seconds, for display.
    #[must_use]
    pub fn average_secs(&self) -> u64 {
        (self.average_ms + 500) / 1_000
    }

    /// Encouragement line for the results screen, keyed off the percent tier.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self.percent {
            90..=100 => "Excellent! Outstanding performance!",
            80..=89 => "Great job! You know your stuff!",
            70..=79 => "Good work! Room for improvement.",
            60..=69 => "Not bad! Keep practicing.",
            _ => "Keep learning and try again!",
        }
    }
}
