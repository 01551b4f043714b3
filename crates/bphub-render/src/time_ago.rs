//! Coarse relative-time buckets for "time since publish".

use chrono::{DateTime, Utc};

/// Render the time elapsed between `then` and `now` as a coarse bucket.
///
/// Future timestamps clamp to "few seconds ago" — a publish instant slightly
/// ahead of the request clock is expected skew, not an error.
pub fn time_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);

    match secs {
        0..=59 => "few seconds ago".to_string(),
        60..=119 => "a minute ago".to_string(),
        120..=3599 => format!("{} minutes ago", secs / 60),
        3600..=7199 => "an hour ago".to_string(),
        7200..=86_399 => format!("{} hours ago", secs / 3600),
        86_400..=172_799 => "a day ago".to_string(),
        172_800..=604_799 => format!("{} days ago", secs / 86_400),
        604_800..=1_209_599 => "a week ago".to_string(),
        _ => format!("{} weeks ago", secs / 604_800),
    }
}
