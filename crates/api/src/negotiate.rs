//! Content negotiation helpers.
//!
//! The browse and search endpoints serve both browsers and data clients
//! from the same routes. Matching is deliberately loose -- a substring
//! check on the `Accept` header -- because that is the contract existing
//! clients rely on: `application/json` (or anything mentioning `json`)
//! selects the data shape, anything mentioning `html` is a browser.

use axum::http::header::ACCEPT;
use axum::http::HeaderMap;

fn accept_contains(headers: &HeaderMap, needle: &str) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains(needle))
}

/// True when the caller prefers a structured data response.
pub fn wants_json(headers: &HeaderMap) -> bool {
    accept_contains(headers, "json")
}

/// True when the caller is a browser expecting rendered HTML.
pub fn wants_html(headers: &HeaderMap) -> bool {
    accept_contains(headers, "html")
}
