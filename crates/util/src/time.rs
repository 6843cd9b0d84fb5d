//! Timestamp and duration formatting for tables and detail views.

use chrono::{DateTime, Utc};

/// Formats a duration in milliseconds the way the dashboards display it:
/// sub-second values in milliseconds, everything else in seconds.
pub fn format_duration_ms(duration_ms: u64) -> String {
    if duration_ms < 1_000 {
        format!("{duration_ms}ms")
    } else {
        format!("{:.1}s", duration_ms as f64 / 1_000.0)
    }
}

/// Compact absolute timestamp, e.g. `May 03 12:00`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%b %d %H:%M").to_string()
}

/// Coarse relative age of `then` as seen from `now`, e.g. `3d ago`.
///
/// Future or same-instant timestamps render as `just now`; precision is
/// deliberately coarse since feeds only need an at-a-glance age.
pub fn relative_from(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{mins}m ago");
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = hours / 24;
    if days < 30 {
        return format!("{days}d ago");
    }
    format!("{}mo ago", days / 30)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .expect("fixture timestamp")
            .and_utc()
    }

    #[test]
    fn durations_switch_units_at_one_second() {
        assert_eq!(format_duration_ms(850), "850ms");
        assert_eq!(format_duration_ms(1_000), "1.0s");
        assert_eq!(format_duration_ms(2_340), "2.3s");
    }

    #[test]
    fn relative_ages_step_through_units() {
        let now = at("2025-05-10 12:00:00");
        assert_eq!(relative_from(now, at("2025-05-10 11:59:30")), "just now");
        assert_eq!(relative_from(now, at("2025-05-10 11:45:00")), "15m ago");
        assert_eq!(relative_from(now, at("2025-05-10 07:00:00")), "5h ago");
        assert_eq!(relative_from(now, at("2025-05-03 12:00:00")), "7d ago");
        assert_eq!(relative_from(now, at("2025-02-01 12:00:00")), "3mo ago");
    }

    #[test]
    fn future_timestamps_render_as_just_now() {
        let now = at("2025-05-10 12:00:00");
        assert_eq!(relative_from(now, at("2025-05-11 12:00:00")), "just now");
    }

    #[test]
    fn absolute_format_is_compact() {
        assert_eq!(format_timestamp(at("2025-05-03 12:00:00")), "May 03 12:00");
    }
}
