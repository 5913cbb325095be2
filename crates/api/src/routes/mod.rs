pub mod health;
pub mod listings;
pub mod web;

use axum::Router;

use crate::state::AppState;

/// Build the full application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                       liveness + database reachability
///
/// /api/listings                 list (GET), create (POST)
/// /api/listings/{id}            get, update (PUT), delete (DELETE)
///
/// /                             home
/// /about                        about
/// /allData                      paginated table (JSON or HTML)
/// /viewData                     paginated mapped table
/// /viewData/clean               only listings with a non-empty name
/// /viewData/price               price range filter (form / results)
/// /viewData/insert              insert form target (POST)
/// /search/name                  name search (form / results)
/// /search/PropertyID            property-id lookup (form / result)
/// /insert/product               insert form
/// /update/product               update form (GET + POST)
/// /delete/product               delete form (GET + POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/listings", listings::router())
        .merge(web::router())
}
