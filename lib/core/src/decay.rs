//! Exponential time-decay weighting for interaction history

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{Error, Result};

/// Reference decay rate, per day
pub const DEFAULT_DECAY_LAMBDA: f64 = 0.05;

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    text.parse::<NaiveDate>()
        .map_err(|e| Error::MalformedDate(format!("{:?}: {}", text, e)))
}

/// `exp(-lambda * max(0, days_ago))`.
///
/// Negative `days_ago` (future-dated events) clamps to zero, so the weight
/// never exceeds 1.0.
#[inline]
pub fn decay_weight_days(days_ago: i64, lambda: f64) -> f64 {
    let days = days_ago.max(0) as f64;
    (-lambda * days).exp()
}

/// Decay weight of an event dated `event_date` as seen from `reference_date`.
///
/// Malformed date text yields 0.0 and a warning; it never fails.
pub fn decay_weight(event_date: &str, reference_date: NaiveDate, lambda: f64) -> f64 {
    match parse_date(event_date) {
        Ok(date) => decay_weight_days((reference_date - date).num_days(), lambda),
        Err(e) => {
            warn!(error = %e, "invalid date in history, weight 0");
            0.0
        }
    }
}
