//! Countdown formatting for timer displays.

const MILLIS_PER_SECOND: i64 = 1_000;
const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Display granularity for a formatted duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationStyle {
    /// Single largest unit: `"2d"`, `"3h"`, `"5m"`, `"12s"`.
    Short,
    /// Compound with leading zero units dropped: `"1h 23m 45s"`.
    Long,
}

/// Formats a millisecond duration for display. Negative durations behave
/// exactly like zero; the result is never negative and the function never
/// panics.
pub fn format_duration(millis: i64, style: DurationStyle) -> String {
    let total_seconds = millis.max(0) / MILLIS_PER_SECOND;
    let days = total_seconds / SECONDS_PER_DAY;
    let hours = (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;

    match style {
        DurationStyle::Short => {
            if days > 0 {
                format!("{days}d")
            } else if hours > 0 {
                format!("{hours}h")
            } else if minutes > 0 {
                format!("{minutes}m")
            } else {
                format!("{seconds}s")
            }
        }
        DurationStyle::Long => {
            if days > 0 {
                format!("{days}d {hours}h {minutes}m {seconds}s")
            } else if hours > 0 {
                format!("{hours}h {minutes}m {seconds}s")
            } else if minutes > 0 {
                format!("{minutes}m {seconds}s")
            } else {
                format!("{seconds}s")
            }
        }
    }
}
