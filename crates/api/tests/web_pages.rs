//! Integration tests for the rendered pages and content negotiation.
//!
//! The pool behind these tests points at an unroutable address, so only
//! paths that never reach the store (static pages, validation failures,
//! input forms) are exercised here, plus store-failure translation.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use common::build_test_app;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn home_page_renders() {
    let app = build_test_app();

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Stayview"));
}

#[tokio::test]
async fn about_page_renders() {
    let app = build_test_app();

    let response = app
        .oneshot(Request::get("/about").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn search_forms_render() {
    for path in ["/search/name", "/search/PropertyID", "/insert/product", "/update/product", "/delete/product"] {
        let app = build_test_app();

        let response = app
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{path} should render");
        let body = body_string(response).await;
        assert!(body.contains("<form"), "{path} should contain a form");
    }
}

#[tokio::test]
async fn empty_name_search_is_400_for_data_clients() {
    let app = build_test_app();

    let request = Request::post("/search/name")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::ACCEPT, "application/json")
        .body(Body::from("property_name=%20%20"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["error"], "Property name is required");
}

#[tokio::test]
async fn empty_name_search_renders_inline_error_for_browsers() {
    let app = build_test_app();

    let request = Request::post("/search/name")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::ACCEPT, "text/html,application/xhtml+xml")
        .body(Body::from("property_name="))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // Browsers get the form back with the error inline, not an error status.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Property name is required"));
    assert!(body.contains("<form"));
}

#[tokio::test]
async fn price_search_without_bounds_shows_form() {
    let app = build_test_app();

    let response = app
        .oneshot(Request::get("/viewData/price").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("minPrice"));
    assert!(body.contains("maxPrice"));
}

#[tokio::test]
async fn price_search_with_one_bound_shows_form() {
    let app = build_test_app();

    let response = app
        .oneshot(
            Request::get("/viewData/price?minPrice=100")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("<form"));
}

#[tokio::test]
async fn malformed_price_bound_is_400_for_data_clients() {
    let app = build_test_app();

    let request = Request::get("/viewData/price?minPrice=cheap&maxPrice=200")
        .header(header::ACCEPT, "application/json")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_price_bound_renders_inline_for_browsers() {
    let app = build_test_app();

    let response = app
        .oneshot(
            Request::get("/viewData/price?minPrice=cheap&maxPrice=200")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("not a valid number"));
}

#[tokio::test]
async fn price_form_post_redirects_to_get() {
    let app = build_test_app();

    let request = Request::post("/viewData/price")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("minPrice=100&maxPrice=200"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers().get(header::LOCATION).unwrap();
    assert_eq!(
        location.to_str().unwrap(),
        "/viewData/price?minPrice=100&maxPrice=200"
    );
}

#[tokio::test]
async fn price_form_post_encodes_reserved_characters() {
    let app = build_test_app();

    // The min bound contains a literal '&'; it must survive the redirect
    // as a single query value instead of splitting the query string.
    let request = Request::post("/viewData/price")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("minPrice=1%26x&maxPrice=200"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers().get(header::LOCATION).unwrap();
    assert_eq!(
        location.to_str().unwrap(),
        "/viewData/price?minPrice=1%26x&maxPrice=200"
    );
}

#[tokio::test]
async fn health_reports_degraded_without_database() {
    let app = build_test_app();

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn store_failure_surfaces_as_sanitized_500() {
    let app = build_test_app();

    let request = Request::get("/api/listings")
        .header(header::ACCEPT, "application/json")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn rest_rejects_non_numeric_id() {
    let app = build_test_app();

    let response = app
        .oneshot(Request::get("/api/listings/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
