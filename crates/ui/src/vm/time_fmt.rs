//! Small display helpers for timer and result durations.

/// Format a countdown value for the timer badge.
#[must_use]
pub fn format_remaining(secs: u32) -> String {
    format!("{secs}s")
}

/// Format an answer duration in whole seconds, rounded half-up.
#[must_use]
pub fn format_elapsed_secs(elapsed_ms: u64) -> String {
    let secs = (elapsed_ms + 500) / 1000;
    format!("{secs}s")
}
