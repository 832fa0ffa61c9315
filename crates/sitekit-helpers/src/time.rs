//! Relative "time ago" formatting.
//!
//! Buckets use fixed 365/30-day approximations for years and months rather
//! than calendar-aware arithmetic; the rendered strings are decorative, not
//! durations anyone computes with.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Format the elapsed time between `then` and `now` as a relative phrase.
///
/// A `then` in the future clamps to "just now".
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use sitekit_helpers::time_ago;
///
/// let now = Utc::now();
/// assert_eq!(time_ago(now - Duration::seconds(90), now), "1 minutes ago");
/// assert_eq!(time_ago(now - Duration::days(400), now), "1 years ago");
/// assert_eq!(time_ago(now, now), "just now");
/// ```
#[must_use]
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then).num_seconds().max(0);

    if elapsed >= YEAR {
        format!("{} years ago", elapsed / YEAR)
    } else if elapsed >= MONTH {
        format!("{} months ago", elapsed / MONTH)
    } else if elapsed >= DAY {
        format!("{} days ago", elapsed / DAY)
    } else if elapsed >= HOUR {
        format!("{} hours ago", elapsed / HOUR)
    } else if elapsed >= MINUTE {
        format!("{} minutes ago", elapsed / MINUTE)
    } else {
        "just now".to_owned()
    }
}

/// [`time_ago`] against the current wall clock.
#[must_use]
pub fn time_ago_from_now(then: DateTime<Utc>) -> String {
    time_ago(then, Utc::now())
}
