//! Insert, update, and delete web forms.
//!
//! These are the browser-facing mutation paths. Validation failures and
//! missing records render inline on the original form rather than as
//! error payloads; only store failures escape as `AppError`.

use axum::extract::State;
use axum::response::Response;
use axum::Form;
use serde_json::json;
use stayview_db::models::listing::{CreateListing, UpdateListing};
use stayview_db::repositories::ListingRepo;

use crate::error::AppResult;
use crate::query::{DeleteForm, InsertForm, UpdateForm};
use crate::state::AppState;
use crate::views;

use super::{page, to_view};

fn blank_to_none(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ---------------------------------------------------------------------------
// Insert
// ---------------------------------------------------------------------------

/// GET /insert/product -- the input form.
pub async fn insert_form() -> Response {
    page(views::forms::insert_form(&[]))
}

/// POST /viewData/insert
pub async fn insert(
    State(state): State<AppState>,
    Form(form): Form<InsertForm>,
) -> AppResult<Response> {
    let listing_id = match form.id.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return Ok(page(views::forms::insert_form(&[format!(
                "Listing ID {:?} is not a valid integer",
                form.id
            )])));
        }
    };

    let input = CreateListing {
        id: listing_id,
        name: form.name,
        host_id: None,
        host_name: blank_to_none(form.host_name),
        neighbourhood_group: None,
        neighbourhood: blank_to_none(form.neighbourhood),
        price: json!(form.price),
        room_type: blank_to_none(form.room_type),
        property_type: blank_to_none(form.property_type),
        thumbnail: None,
        images: None,
    };

    let doc = match input.into_doc() {
        Ok(doc) => doc,
        Err(err) => return Ok(page(views::forms::insert_form(&[err.to_string()]))),
    };

    match ListingRepo::insert(&state.pool, listing_id, &doc).await {
        Ok(record) => {
            tracing::info!(listing_id, "Listing inserted via form");
            Ok(page(views::forms::insert_success(&to_view(&record))))
        }
        Err(err) if is_unique_violation(&err) => Ok(page(views::forms::insert_form(&[format!(
            "A listing with ID {listing_id} already exists"
        )]))),
        Err(err) => Err(err.into()),
    }
}

/// True for a PostgreSQL unique constraint violation (error code 23505).
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// GET /update/product -- the input form.
pub async fn update_form() -> Response {
    page(views::forms::update_form(&[]))
}

/// POST /update/product
///
/// Patches name and/or price by external id. Name updates dual-write the
/// legacy key variant; price strings are normalized to numbers.
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateForm>,
) -> AppResult<Response> {
    let listing_id = match form.id.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return Ok(page(views::forms::update_form(&[
                "Listing ID is required".to_string()
            ])));
        }
    };

    let input = UpdateListing {
        name: blank_to_none(form.name),
        price: blank_to_none(form.price).map(|p| json!(p)),
        ..Default::default()
    };

    let patch = match input.into_patch() {
        Ok(patch) => patch,
        Err(err) => return Ok(page(views::forms::update_form(&[err.to_string()]))),
    };

    match ListingRepo::patch(&state.pool, listing_id, &patch).await? {
        Some(record) => {
            tracing::info!(listing_id, "Listing updated via form");
            Ok(page(views::forms::update_success(&to_view(&record))))
        }
        None => Ok(page(views::forms::update_form(&[format!(
            "No listing found with ID: {listing_id}"
        )]))),
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// GET /delete/product -- the input form.
pub async fn delete_form() -> Response {
    page(views::forms::delete_form(&[]))
}

/// POST /delete/product
///
/// Deletes by external id and shows the removed listing. An unknown id
/// renders inline on the form; the store is left unchanged.
pub async fn delete(
    State(state): State<AppState>,
    Form(form): Form<DeleteForm>,
) -> AppResult<Response> {
    let listing_id = match form.id.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return Ok(page(views::forms::delete_form(&[
                "Listing ID is required".to_string()
            ])));
        }
    };

    match ListingRepo::delete(&state.pool, listing_id).await? {
        Some(record) => {
            tracing::info!(listing_id, "Listing deleted via form");
            Ok(page(views::forms::delete_success(&to_view(&record))))
        }
        None => Ok(page(views::forms::delete_form(&[format!(
            "No listing found with ID: {listing_id}"
        )]))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_become_none() {
        assert_eq!(blank_to_none("".into()), None);
        assert_eq!(blank_to_none("   ".into()), None);
        assert_eq!(blank_to_none(" Queens ".into()), Some("Queens".into()));
    }
}
