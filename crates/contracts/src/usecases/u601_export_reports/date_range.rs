use chrono::{Duration, NaiveDate};

/// Date format used by `<input type="date">` and the backend
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Start/end pair as typed into the report form.
///
/// Values are kept as the raw `YYYY-MM-DD` strings of the inputs; an empty
/// string means the input was cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Range covering `days` days back from `today`, both ends inclusive
    pub fn trailing_days(today: NaiveDate, days: i64) -> Self {
        let start = today - Duration::days(days);
        Self::new(
            start.format(DATE_FORMAT).to_string(),
            today.format(DATE_FORMAT).to_string(),
        )
    }

    /// Both dates, only when neither input is empty
    pub fn complete(&self) -> Option<(&str, &str)> {
        let start = self.start_date.trim();
        let end = self.end_date.trim();
        if start.is_empty() || end.is_empty() {
            None
        } else {
            Some((start, end))
        }
    }
}
