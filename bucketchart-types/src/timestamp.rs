//! Time-slot label formatting.
//!
//! Buckets on a time axis carry their slot identity as epoch milliseconds.
//! Labels are rendered as ISO-8601 UTC with millisecond precision and a `Z`
//! suffix, e.g. `2025-01-01T00:00:00.000Z`.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format epoch milliseconds as an ISO-8601 UTC string.
///
/// Returns `None` when the value is not finite or lies outside the range
/// `chrono` can represent. Fractional milliseconds are truncated.
pub fn format_epoch_millis(millis: f64) -> Option<String> {
    if !millis.is_finite() {
        return None;
    }
    // `as` saturates, and saturated values are rejected by chrono below.
    DateTime::<Utc>::from_timestamp_millis(millis.trunc() as i64)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_zero() {
        assert_eq!(
            format_epoch_millis(0.0).as_deref(),
            Some("1970-01-01T00:00:00.000Z")
        );
    }

    #[test]
    fn formats_with_millisecond_precision() {
        // 2025-01-01T00:00:00.250Z
        assert_eq!(
            format_epoch_millis(1_735_689_600_250.0).as_deref(),
            Some("2025-01-01T00:00:00.250Z")
        );
    }

    #[test]
    fn truncates_fractional_millis() {
        assert_eq!(
            format_epoch_millis(1_735_689_600_250.9).as_deref(),
            Some("2025-01-01T00:00:00.250Z")
        );
    }

    #[test]
    fn negative_timestamps_are_before_epoch() {
        assert_eq!(
            format_epoch_millis(-1000.0).as_deref(),
            Some("1969-12-31T23:59:59.000Z")
        );
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(format_epoch_millis(f64::NAN).is_none());
        assert!(format_epoch_millis(f64::INFINITY).is_none());
        assert!(format_epoch_millis(f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(format_epoch_millis(1e300).is_none());
        assert!(format_epoch_millis(-1e300).is_none());
    }
}
