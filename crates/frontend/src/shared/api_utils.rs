//! API utilities for frontend-backend communication
//!
//! The backend serves this page, so requests go to the page origin.

/// Get the base URL for API requests
///
/// # Returns
/// - Page origin like "http://localhost:5000"
/// - Empty string if window is not available, which leaves paths relative
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url(FETCH_DATA_PATH);
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
