//! Display formatting for tables and axis labels

use chrono::DateTime;

use crate::smoothing::round_2dp;

/// Render a finishing time: `"52.3s"` up to a minute, `"1m4.5s"` beyond.
///
/// # Examples
///
/// ```rust
/// use sprint_analytics::format::prettify_seconds;
///
/// assert_eq!(prettify_seconds(52.3), "52.3s");
/// assert_eq!(prettify_seconds(60.0), "60s");
/// assert_eq!(prettify_seconds(64.456), "1m4.46s");
/// ```
#[must_use]
pub fn prettify_seconds(seconds: f64) -> String {
    if seconds <= 60.0 {
        return format!("{seconds}s");
    }
    let minutes = (seconds / 60.0).floor();
    let remainder = round_2dp(seconds % 60.0);
    format!("{minutes}m{remainder}s")
}

/// Render an epoch timestamp as `YYYY-MM-DD HH:MM` in UTC.
///
/// Returns `None` for timestamps chrono cannot represent.
#[must_use]
pub fn format_date(epoch_seconds: i64) -> Option<String> {
    DateTime::from_timestamp(epoch_seconds, 0).map(|d| d.format("%Y-%m-%d %H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettify_under_a_minute() {
        assert_eq!(prettify_seconds(41.207), "41.207s");
        assert_eq!(prettify_seconds(45.0), "45s");
    }

    #[test]
    fn test_prettify_over_a_minute() {
        assert_eq!(prettify_seconds(75.5), "1m15.5s");
        assert_eq!(prettify_seconds(120.0), "2m0s");
        assert_eq!(prettify_seconds(61.999), "1m2s");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(0).as_deref(), Some("1970-01-01 00:00"));
        assert_eq!(
            format_date(1_700_000_000).as_deref(),
            Some("2023-11-14 22:13")
        );
    }

    #[test]
    fn test_format_date_out_of_range() {
        assert_eq!(format_date(i64::MAX), None);
    }
}
