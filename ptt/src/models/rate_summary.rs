// src/models/rate_summary.rs

use crate::models::Snapshot;

/// Throughput between two snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSummary {
    pub elapsed_seconds: f64,
    pub increment: i64,
    pub per_second: f64,
}

impl RateSummary {
    /// Derives elapsed time, page increment, and average rate between
    /// two snapshots.
    ///
    /// Negative elapsed time (inconsistent clocks) and negative
    /// increments (a reset status file) pass through unclamped; the
    /// rate falls back to `0.0` unless time actually advanced.
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn between(previous: &Snapshot, current: &Snapshot) -> Self {
        let delta = current.timestamp.signed_duration_since(previous.timestamp);
        let elapsed_seconds = delta.num_milliseconds() as f64 / 1000.0;
        let increment = current.sum.saturating_sub(previous.sum);
        let per_second = if elapsed_seconds > 0.0 {
            increment as f64 / elapsed_seconds
        } else {
            0.0
        };

        Self {
            elapsed_seconds,
            increment,
            per_second,
        }
    }
}
