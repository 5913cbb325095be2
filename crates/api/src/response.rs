//! Shared response envelope types for API handlers.
//!
//! All collection responses use one of these envelopes instead of ad-hoc
//! `serde_json::json!` objects, so the wire shape stays consistent across
//! endpoints. Field names are camelCased on the wire (`totalPages`).

use serde::Serialize;

/// Standard `{ "data": T }` response envelope for single records.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Envelope for the direct listing endpoint: `{page, limit, count, data}`.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub page: i64,
    pub limit: i64,
    pub count: usize,
    pub data: Vec<T>,
}

/// Envelope for paginated filter results: `{page, totalPages, count, data}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T: Serialize> {
    pub page: i64,
    pub total_pages: i64,
    pub count: usize,
    pub data: Vec<T>,
}

/// Envelope for capped (unpaginated) search results: `{count, data}`.
#[derive(Debug, Serialize)]
pub struct SearchResponse<T: Serialize> {
    pub count: usize,
    pub data: Vec<T>,
}
