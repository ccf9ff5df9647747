/// Utilities for date and time formatting
///
/// All calendar dates are UTC, matching what the backend filters on.
use chrono::{DateTime, NaiveDate, Utc};
use contracts::usecases::u601_export_reports::DateRange;

/// Length of the range pre-filled into the report form.
pub const DEFAULT_RANGE_DAYS: i64 = 30;

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// "30 days ago" .. "today"
pub fn default_report_range(today: NaiveDate) -> DateRange {
    DateRange::trailing_days(today, DEFAULT_RANGE_DAYS)
}

/// ISO-8601 instant cut to seconds with ':' and '.' turned into '-',
/// safe for use in a filename.
/// Example: 2024-03-15T14:02:26.123Z -> "2024-03-15T14-02-26"
pub fn filename_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S")
        .to_string()
        .replace([':', '.'], "-")
}
