//! Uptime and wall-clock snapshot computation.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Runtime facts computed fresh per request from the fixed start time.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeSnapshot {
    /// Elapsed whole seconds since process start. Never negative, never
    /// resets without a process restart.
    pub uptime_seconds: i64,
    /// Human-readable hours/minutes rendering.
    pub uptime_human: String,
    /// Current wall-clock time, ISO-8601 with explicit UTC offset.
    pub current_time: String,
    /// Fixed timezone label.
    pub timezone: &'static str,
}

impl RuntimeSnapshot {
    /// Compute the snapshot for `now` against the process start time.
    pub fn compute(started_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        // Clamp guards against wall-clock skew; uptime must stay >= 0.
        let seconds = (now - started_at).num_seconds().max(0);

        Self {
            uptime_seconds: seconds,
            uptime_human: format_uptime(seconds),
            current_time: now.to_rfc3339(),
            timezone: "UTC",
        }
    }

    /// Compute the snapshot against the current wall clock.
    pub fn now(started_at: DateTime<Utc>) -> Self {
        Self::compute(started_at, Utc::now())
    }
}

/// Render whole seconds as `"{hours} hour(s), {minutes} minute(s)"`.
///
/// Pluralization is applied independently to each unit; the seconds
/// remainder is discarded.
pub fn format_uptime(seconds: i64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    format!(
        "{hours} hour{}, {minutes} minute{}",
        if hours == 1 { "" } else { "s" },
        if minutes == 1 { "" } else { "s" },
    )
}
