//! HTTP utilities for MFL API communication

use crate::{Result, BASE_URL_ENV_VAR};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Client,
};
use std::time::Duration;

/// Default MFL public API root.
pub const MFL_BASE_URL: &str = "https://z519wdyajg.execute-api.us-east-1.amazonaws.com/prod";

/// Upstream requests give up after this long.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Pick the API base URL: explicit value, then `MFL_API_BASE_URL`, then the default.
///
/// Trailing slashes are stripped so paths can be appended directly.
pub fn resolve_base_url(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| MFL_BASE_URL.to_string())
        .trim()
        .trim_end_matches('/')
        .to_string()
}

/// Headers sent with every MFL request.
pub fn default_header_map() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    h.insert(USER_AGENT, HeaderValue::from_str(&agent)?);
    Ok(h)
}

/// Client configured with the default headers and request timeout.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .default_headers(default_header_map()?)
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}
