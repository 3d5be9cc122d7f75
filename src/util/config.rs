//! Runtime configuration: backend base URL and UI timing constants.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Backend used when the page itself is served from a local dev host.
pub const LOCAL_API_BASE_URL: &str = "http://localhost:8000/api";

/// Number of history records requested for the history panel.
pub const HISTORY_LIMIT: usize = 5;

/// Hourly forecast entries rendered from the backend payload.
pub const HOURLY_WINDOW: usize = 24;

pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1000);
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// How long inline success/error messages stay visible.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_millis(5000);

/// How long the save button shows "Saved!" before resetting.
pub const SAVE_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Resolve the API base URL for a page served at `hostname` / `origin`.
///
/// Local hosts talk to the dev backend on port 8000; anything else expects
/// the backend mounted under `/api` on the same origin.
pub fn api_base_url_for(hostname: &str, origin: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        LOCAL_API_BASE_URL.to_owned()
    } else {
        format!("{}/api", origin.trim_end_matches('/'))
    }
}

/// API base URL for the current page.
pub fn api_base_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        let location = web_sys::window().map(|w| w.location());
        let hostname = location.as_ref().and_then(|l| l.hostname().ok());
        let origin = location.as_ref().and_then(|l| l.origin().ok());
        match (hostname, origin) {
            (Some(hostname), Some(origin)) => api_base_url_for(&hostname, &origin),
            _ => LOCAL_API_BASE_URL.to_owned(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        LOCAL_API_BASE_URL.to_owned()
    }
}
