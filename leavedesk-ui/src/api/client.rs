//! HTTP API Client
//!
//! Calls to the leave management API.

use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Get the API base URL from local storage or use default
fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("leavedesk_api_url").ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim_end_matches('/').to_string()
}

/// A leave request as listed by the API
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct LeaveRequest {
    pub id: i64,
    pub user_id: i64,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

/// Fetch all leave requests. Network, status and parse failures all come
/// back as one error string.
pub async fn fetch_leave_requests() -> Result<Vec<LeaveRequest>, String> {
    let response = Request::get(&format!("{}/leave-requests/", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
