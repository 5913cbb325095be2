//! Browser-facing routes mounted at the root.
//!
//! Paths are kept byte-for-byte compatible with the previous deployment
//! (`/allData`, `/viewData/...`, `/search/PropertyID`) so existing
//! bookmarks and scripted clients keep working.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{browse, forms, search};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(browse::home))
        .route("/about", get(browse::about))
        .route("/allData", get(browse::all_data))
        .route("/viewData", get(browse::view_data))
        .route("/viewData/clean", get(browse::clean_data))
        .route(
            "/viewData/price",
            get(search::price_search).post(search::price_redirect),
        )
        .route("/viewData/insert", post(forms::insert))
        .route("/search/name", get(search::name_form).post(search::name_search))
        .route(
            "/search/PropertyID",
            get(search::property_form).post(search::property_search),
        )
        .route("/insert/product", get(forms::insert_form))
        .route("/update/product", get(forms::update_form).post(forms::update))
        .route("/delete/product", get(forms::delete_form).post(forms::delete))
}
