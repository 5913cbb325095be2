//! REST routes for the listings collection, mounted at `/api/listings`.
//!
//! ```text
//! GET    /        -> list_listings
//! POST   /        -> create_listing
//! GET    /{id}    -> get_listing
//! PUT    /{id}    -> update_listing
//! DELETE /{id}    -> delete_listing
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::listings;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(listings::list_listings).post(listings::create_listing))
        .route(
            "/{id}",
            get(listings::get_listing)
                .put(listings::update_listing)
                .delete(listings::delete_listing),
        )
}
