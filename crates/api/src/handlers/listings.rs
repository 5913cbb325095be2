//! JSON REST handlers for `/api/listings`.
//!
//! Records are addressed by external id throughout; the store-internal row
//! id never appears on the wire. Every response body carries normalized
//! listings, so legacy-keyed records come out in the canonical shape.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stayview_core::pagination;
use stayview_core::types::DbId;
use stayview_db::models::listing::{CreateListing, UpdateListing};
use stayview_db::repositories::ListingRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

use super::{to_view, to_views};

/// GET /api/listings
///
/// Paginated list, ordered by external id ascending. `limit` is
/// caller-specified here (clamped), unlike the filter endpoints.
pub async fn list_listings(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = pagination::clamp_page(params.page);
    let limit = pagination::clamp_limit(params.limit);

    let records = ListingRepo::list_page(&state.pool, limit, pagination::offset(page, limit)).await?;
    let data = to_views(&records);

    Ok(Json(ListResponse {
        page,
        limit,
        count: data.len(),
        data,
    }))
}

/// GET /api/listings/{id}
pub async fn get_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = ListingRepo::find_by_listing_id(&state.pool, listing_id)
        .await?
        .ok_or_else(|| AppError::listing_not_found(listing_id))?;

    Ok(Json(DataResponse {
        data: to_view(&record),
    }))
}

/// POST /api/listings
///
/// 201 with the created listing; 400 on validation failure; 409 when the
/// external id already exists (unique constraint, classified in the error
/// layer).
pub async fn create_listing(
    State(state): State<AppState>,
    Json(input): Json<CreateListing>,
) -> AppResult<impl IntoResponse> {
    let listing_id = input.id;
    let doc = input.into_doc()?;

    let record = ListingRepo::insert(&state.pool, listing_id, &doc).await?;

    tracing::info!(listing_id, "Listing created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: to_view(&record),
        }),
    ))
}

/// PUT /api/listings/{id}
///
/// Partial update. Fields with a legacy key variant are written under
/// both keys so older records stay readable either way.
pub async fn update_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<DbId>,
    Json(input): Json<UpdateListing>,
) -> AppResult<impl IntoResponse> {
    let patch = input.into_patch()?;

    let record = ListingRepo::patch(&state.pool, listing_id, &patch)
        .await?
        .ok_or_else(|| AppError::listing_not_found(listing_id))?;

    tracing::info!(listing_id, "Listing updated");

    Ok(Json(DataResponse {
        data: to_view(&record),
    }))
}

/// DELETE /api/listings/{id}
pub async fn delete_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if ListingRepo::delete(&state.pool, listing_id).await?.is_none() {
        return Err(AppError::listing_not_found(listing_id));
    }

    tracing::info!(listing_id, "Listing deleted");

    Ok(StatusCode::NO_CONTENT)
}
