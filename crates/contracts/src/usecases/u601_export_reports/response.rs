use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply of `POST /fetch_data`; the backend answers 200 even on failure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchDataResponse {
    pub success: bool,

    #[serde(default)]
    pub data: Option<Vec<Value>>,

    #[serde(default)]
    pub count: Option<usize>,

    #[serde(default)]
    pub message: Option<String>,
}

impl FetchDataResponse {
    /// Reported row count, falling back to the rows actually received
    pub fn row_count(&self) -> usize {
        self.count
            .unwrap_or_else(|| self.data.as_ref().map(Vec::len).unwrap_or(0))
    }
}

/// JSON body of a failed `/download_excel`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: String,
}
