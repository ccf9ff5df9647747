use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::DateRange;

/// Body of `POST /fetch_data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchDataRequest {
    /// Report key, e.g. "divergencias"
    #[serde(rename = "type")]
    pub report_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl FetchDataRequest {
    pub fn new(report_type: impl Into<String>) -> Self {
        Self {
            report_type: report_type.into(),
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_range(mut self, range: &DateRange) -> Self {
        if let Some((start, end)) = range.complete() {
            self.start_date = Some(start.to_string());
            self.end_date = Some(end.to_string());
        }
        self
    }
}

/// Body of `POST /download_excel`.
///
/// Rows are passed through untouched; their shape belongs to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadExcelRequest {
    pub data: Vec<Value>,
    pub filename: String,
}
