/// Per-question answer budget in seconds.
pub const QUESTION_TIME_LIMIT_SECS: u32 = 30;

/// Outcome of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Seconds still remaining after this tick.
    Running(u32),
    /// The budget is used up; the caller should submit whatever selection is
    /// pending and stop ticking.
    Expired,
}

/// Pure per-question countdown state.
///
/// The scheduling itself (one tick per second) is owned by the UI layer as a
/// cancelable task; this type only tracks remaining time so the expiry
/// semantics stay testable without a runtime. Ticking past zero keeps
/// reporting `Expired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self { remaining: secs }
    }

    /// A countdown with the standard per-question budget.
    #[must_use]
    pub fn for_question() -> Self {
        Self::new(QUESTION_TIME_LIMIT_SECS)
    }

    /// Consume one second.
    pub fn tick(&mut self) -> CountdownTick {
        if self.remaining == 0 {
            return CountdownTick::Expired;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            CountdownTick::Expired
        } else {
            CountdownTick::Running(self.remaining)
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Restore the full per-question budget, for the next position.
    pub fn reset(&mut self) {
        self.remaining = QUESTION_TIME_LIMIT_SECS;
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::for_question()
    }
}
