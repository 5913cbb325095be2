//! Search endpoints: name substring, property-id lookup, price range.
//!
//! Name and price search are the two evaluator modes; a request uses one
//! or the other, never both. The price filter cannot be pushed into the
//! store because legacy records hold currency strings, so it coerces and
//! filters in-process over the full candidate set.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde_json::json;
use stayview_core::filter::{self, PriceRange, SEARCH_RESULT_CAP};
use stayview_core::pagination::{self, DEFAULT_PAGE_SIZE};
use stayview_core::price;
use stayview_db::repositories::ListingRepo;

use crate::error::AppResult;
use crate::negotiate;
use crate::query::{NameSearchForm, PriceRangeForm, PriceRangeParams, PropertyIdForm};
use crate::response::{PageResponse, SearchResponse};
use crate::state::AppState;
use crate::views;

use super::{page, to_view};

// ---------------------------------------------------------------------------
// Name search
// ---------------------------------------------------------------------------

/// GET /search/name -- the input form.
pub async fn name_form() -> Response {
    page(views::search::name_form(&[]))
}

/// POST /search/name
///
/// Case-insensitive substring search over listing names, capped at 50
/// results in store iteration order. Empty input is a validation error:
/// inline on the form for browsers, a 400 payload for data clients.
pub async fn name_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<NameSearchForm>,
) -> AppResult<Response> {
    let term = match filter::search_term(&form.property_name) {
        Ok(term) => term,
        Err(err) => {
            if negotiate::wants_html(&headers) {
                return Ok(page(views::search::name_form(&[err.to_string()])));
            }
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Property name is required" })),
            )
                .into_response());
        }
    };

    let candidates = ListingRepo::fetch_all(&state.pool).await?;
    let results: Vec<_> = candidates
        .iter()
        .filter(|record| filter::matches_name(&record.doc, term))
        .take(SEARCH_RESULT_CAP)
        .map(to_view)
        .collect();

    if negotiate::wants_json(&headers) {
        return Ok(Json(SearchResponse {
            count: results.len(),
            data: results,
        })
        .into_response());
    }

    Ok(page(views::search::name_results(&results, term)))
}

// ---------------------------------------------------------------------------
// Property-id lookup
// ---------------------------------------------------------------------------

/// GET /search/PropertyID -- the input form.
pub async fn property_form() -> Response {
    page(views::search::property_form())
}

/// POST /search/PropertyID
///
/// Single-record lookup by external id. Missing or unparseable input, and
/// ids with no record, all land on the dedicated not-found view state.
pub async fn property_search(
    State(state): State<AppState>,
    Form(form): Form<PropertyIdForm>,
) -> AppResult<Response> {
    let input = form.property_id.trim();

    let record = match input.parse::<i64>() {
        Ok(listing_id) => ListingRepo::find_by_listing_id(&state.pool, listing_id).await?,
        Err(_) => None,
    };

    let result = record.as_ref().map(to_view);
    Ok(page(views::search::property_result(result.as_ref(), input)))
}

// ---------------------------------------------------------------------------
// Price range search
// ---------------------------------------------------------------------------

/// GET /viewData/price
///
/// With both bounds present: coerce every candidate's price, keep those in
/// the inclusive range, paginate at 50/page. With either bound absent:
/// just the input form. Malformed bounds are a validation error.
pub async fn price_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PriceRangeParams>,
) -> AppResult<Response> {
    let (min_raw, max_raw) = match (
        params.min_price.as_deref().filter(|s| !s.is_empty()),
        params.max_price.as_deref().filter(|s| !s.is_empty()),
    ) {
        (Some(min), Some(max)) => (min, max),
        _ => return Ok(page(views::search::price_form(&[]))),
    };

    let range = match parse_bounds(min_raw, max_raw) {
        Ok(range) => range,
        Err(message) => {
            if negotiate::wants_json(&headers) {
                return Ok(
                    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
                );
            }
            return Ok(page(views::search::price_form(&[message])));
        }
    };

    let candidates = ListingRepo::fetch_all(&state.pool).await?;
    let matching: Vec<_> = candidates
        .iter()
        .filter(|record| range.matches(&record.doc))
        .collect();

    let window = pagination::window(params.page, DEFAULT_PAGE_SIZE, matching.len() as i64);
    let results: Vec<_> = pagination::slice(matching, &window)
        .into_iter()
        .map(to_view)
        .collect();

    if negotiate::wants_json(&headers) {
        return Ok(Json(PageResponse {
            page: window.page,
            total_pages: window.total_pages,
            count: results.len(),
            data: results,
        })
        .into_response());
    }

    Ok(page(views::search::price_results(
        &results,
        window.page,
        window.total_pages,
        range.min,
        range.max,
    )))
}

/// POST /viewData/price -- the form posts here and is redirected to the
/// GET view so results are linkable.
pub async fn price_redirect(Form(form): Form<PriceRangeForm>) -> Redirect {
    Redirect::to(&price_redirect_target(&form.min_price, &form.max_price))
}

/// Bounds are user text and go back out in a query string, so they get
/// percent-encoded on the way through.
fn price_redirect_target(min: &str, max: &str) -> String {
    format!(
        "/viewData/price?minPrice={}&maxPrice={}",
        urlencoding::encode(min.trim()),
        urlencoding::encode(max.trim())
    )
}

/// Parse and sanity-check submitted bounds.
///
/// Accepts currency formatting (`$1,500`). Unlike write-side validation,
/// negative bounds are allowed; non-negativity is a write-time constraint
/// on stored prices, not a read-time one.
fn parse_bounds(min_raw: &str, max_raw: &str) -> Result<PriceRange, String> {
    let parse = |raw: &str, which: &str| {
        price::strip_currency(raw)
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| format!("{which} price {raw:?} is not a valid number"))
    };

    let min = parse(min_raw, "Minimum")?;
    let max = parse(max_raw, "Maximum")?;

    if min > max {
        return Err("Minimum price must not exceed maximum price".into());
    }
    Ok(PriceRange { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_accept_currency_strings() {
        let range = parse_bounds("$100", "1,500").unwrap();
        assert_eq!(range.min, 100.0);
        assert_eq!(range.max, 1500.0);
    }

    #[test]
    fn bounds_reject_garbage() {
        assert!(parse_bounds("low", "200").is_err());
        assert!(parse_bounds("100", "high").is_err());
    }

    #[test]
    fn bounds_reject_inverted_range() {
        assert!(parse_bounds("300", "200").is_err());
    }

    #[test]
    fn redirect_target_encodes_bounds() {
        assert_eq!(
            price_redirect_target(" 100 ", "200"),
            "/viewData/price?minPrice=100&maxPrice=200"
        );
        // Reserved characters in the input must not split the query string.
        assert_eq!(
            price_redirect_target("1&maxPrice=9", "2#0"),
            "/viewData/price?minPrice=1%26maxPrice%3D9&maxPrice=2%230"
        );
    }

    #[test]
    fn negative_bounds_are_allowed() {
        // Stored prices can be negative; only writes enforce price >= 0.
        let range = parse_bounds("-50", "0").unwrap();
        assert_eq!(range.min, -50.0);
        assert_eq!(range.max, 0.0);
    }
}
