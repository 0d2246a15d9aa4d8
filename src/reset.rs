//! Daily and weekly reset arithmetic.
//!
//! Resets happen at 00:00 UTC; the weekly reset lands on Monday. Both
//! functions take the current instant as an argument so countdowns stay
//! deterministic under test.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc, Weekday};

/// Next daily reset (upcoming 00:00 UTC) strictly after `now`.
pub fn next_daily_reset(now: DateTime<Utc>) -> DateTime<Utc> {
    let midnight = Utc
        .with_ymd_and_hms(now.year(), now.month(), now.day(), 0, 0, 0)
        .single()
        .unwrap_or(now);
    midnight + Duration::days(1)
}

/// Next weekly reset (upcoming Monday 00:00 UTC) strictly after `now`.
pub fn next_weekly_reset(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = next_daily_reset(now) - Duration::days(1);
    let days_ahead = match today.weekday() {
        Weekday::Mon => 7,
        other => 7 - other.num_days_from_monday() as i64,
    };
    today + Duration::days(days_ahead)
}
