//! HTTP handlers.
//!
//! `listings` is the JSON REST surface; `browse`, `search`, and `forms`
//! are the server-rendered pages. All of them normalize records through
//! `stayview_core::listing::normalize` before anything leaves the process.

pub mod browse;
pub mod forms;
pub mod health;
pub mod listings;
pub mod search;

use axum::response::{Html, IntoResponse, Response};
use maud::Markup;
use stayview_core::listing::{normalize, ListingView};
use stayview_db::models::listing::ListingRecord;

/// Normalize a stored row to the canonical output shape.
pub(crate) fn to_view(record: &ListingRecord) -> ListingView {
    normalize(record.listing_id, &record.doc)
}

pub(crate) fn to_views(records: &[ListingRecord]) -> Vec<ListingView> {
    records.iter().map(to_view).collect()
}

/// Render a maud page as an HTML response.
pub(crate) fn page(markup: Markup) -> Response {
    Html(markup.into_string()).into_response()
}
