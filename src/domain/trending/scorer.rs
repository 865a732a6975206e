use crate::domain::content::ContentItem;
use chrono::{DateTime, Utc};

/// Age at which the recency component reaches zero
pub const RECENCY_HORIZON_HOURS: f64 = 100.0;
pub const FAVORITE_BOOST: f64 = 10.0;
pub const READ_PENALTY: f64 = 5.0;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Linear decay from 100 at publication to 0 at `RECENCY_HORIZON_HOURS`
pub fn recency_score(published_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let hours_old = now.signed_duration_since(published_at).num_milliseconds() as f64
        / MILLIS_PER_HOUR;
    (RECENCY_HORIZON_HOURS - hours_old.min(RECENCY_HORIZON_HOURS)).max(0.0)
}

/// Recency plus engagement adjustments, rounded half up. Not clamped.
pub fn compute_change_score(item: &ContentItem, now: DateTime<Utc>) -> i64 {
    let mut score = recency_score(item.published_at, now);
    if item.is_favorite {
        score += FAVORITE_BOOST;
    }
    if item.is_read {
        score -= READ_PENALTY;
    }
    (score + 0.5).floor() as i64
}
