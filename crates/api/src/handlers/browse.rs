//! Server-rendered browse pages.
//!
//! `/allData` is content-negotiated: callers with a JSON accept
//! preference get the `{page, totalPages, count, data}` shape, everyone
//! else gets the rendered table. The other browse views are HTML only.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use stayview_core::pagination::{self, DEFAULT_PAGE_SIZE};
use stayview_db::repositories::ListingRepo;

use crate::error::AppResult;
use crate::negotiate;
use crate::query::PageParams;
use crate::response::PageResponse;
use crate::state::AppState;
use crate::views;

use super::{page, to_views};

/// GET /
pub async fn home() -> Response {
    page(views::home())
}

/// GET /about
pub async fn about() -> Response {
    page(views::about())
}

/// GET /allData
pub async fn all_data(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PageParams>,
) -> AppResult<Response> {
    let total = ListingRepo::count(&state.pool).await?;
    let window = pagination::window(params.page, DEFAULT_PAGE_SIZE, total);

    let records = ListingRepo::list_page(&state.pool, window.limit, window.skip).await?;
    let data = to_views(&records);

    if negotiate::wants_json(&headers) {
        return Ok(Json(PageResponse {
            page: window.page,
            total_pages: window.total_pages,
            count: data.len(),
            data,
        })
        .into_response());
    }

    Ok(page(views::browse::all_data(
        &data,
        window.page,
        window.total_pages,
    )))
}

/// GET /viewData
pub async fn view_data(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Response> {
    let total = ListingRepo::count(&state.pool).await?;
    let window = pagination::window(params.page, DEFAULT_PAGE_SIZE, total);

    let records = ListingRepo::list_page(&state.pool, window.limit, window.skip).await?;
    let data = to_views(&records);

    Ok(page(views::browse::view_data(
        &data,
        window.page,
        window.total_pages,
    )))
}

/// GET /viewData/clean
///
/// Same as `/viewData` but restricted to listings with a non-empty name;
/// the predicate is pushed into the store.
pub async fn clean_data(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Response> {
    let total = ListingRepo::count_named(&state.pool).await?;
    let window = pagination::window(params.page, DEFAULT_PAGE_SIZE, total);

    let records = ListingRepo::list_named_page(&state.pool, window.limit, window.skip).await?;
    let data = to_views(&records);

    Ok(page(views::browse::clean_data(
        &data,
        window.page,
        window.total_pages,
    )))
}
