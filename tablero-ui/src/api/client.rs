//! HTTP API Client
//!
//! Functions for communicating with the indicator REST API. Failures come back
//! as display-ready strings: the API's own `error` message when it sent one,
//! otherwise a short description of what went wrong.

use gloo_net::http::{Request, Response};

use crate::state::EconomicIndicator;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Local storage key overriding the API base URL
pub const API_URL_STORAGE_KEY: &str = "tablero_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten());

    normalize_base(stored.as_deref())
}

/// Trim trailing slashes; blank or missing values fall back to the default
fn normalize_base(stored: Option<&str>) -> String {
    let url = stored
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE);
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: String,
}

/// Fetch every indicator, in server order
pub async fn fetch_indicators() -> Result<Vec<EconomicIndicator>, String> {
    let response = Request::get(&format!("{}/indicators", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let response = ensure_ok(response).await?;

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

async fn ensure_ok(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let error = response
        .json::<ApiError>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| format!("HTTP {}", status));
    Err(error)
}
