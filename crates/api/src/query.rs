//! Shared query parameter and form types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?page=&limit=`).
///
/// Values are clamped via `pagination::clamp_page` / `clamp_limit`; the
/// filter/search endpoints ignore `limit` and always use the default page
/// size.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for the price range filter.
///
/// Bounds arrive as raw strings so malformed input surfaces as a
/// validation error (inline for rendering callers) instead of a framework
/// rejection. Both bounds absent means "show the input form".
#[derive(Debug, Deserialize)]
pub struct PriceRangeParams {
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    pub page: Option<i64>,
}

/// Name search form body.
#[derive(Debug, Deserialize)]
pub struct NameSearchForm {
    #[serde(default)]
    pub property_name: String,
}

/// Property-id search form body.
#[derive(Debug, Deserialize)]
pub struct PropertyIdForm {
    #[serde(default)]
    pub property_id: String,
}

/// Price range form body (POST redirects to the GET view).
#[derive(Debug, Deserialize)]
pub struct PriceRangeForm {
    #[serde(rename = "minPrice", default)]
    pub min_price: String,
    #[serde(rename = "maxPrice", default)]
    pub max_price: String,
}

/// Insert form body. Everything is a string; parsing and validation happen
/// in the handler so errors render inline.
#[derive(Debug, Deserialize)]
pub struct InsertForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub host_name: String,
    #[serde(default)]
    pub neighbourhood: String,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub price: String,
}

/// Update form body. Blank fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
}

/// Delete form body.
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub id: String,
}
