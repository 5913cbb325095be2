//! Search pages: name search, property-id lookup, price range filter.

use maud::{html, Markup};
use stayview_core::listing::ListingView;

use super::{error_list, layout, listing_detail, listing_table, pager};

pub fn name_form(errors: &[String]) -> Markup {
    layout(
        "Search by Property Name",
        html! {
            h1 { "Search by Property Name" }
            (error_list(errors))
            form method="post" action="/search/name" {
                label for="property_name" { "Property name" }
                input type="text" id="property_name" name="property_name";
                button type="submit" { "Search" }
            }
        },
    )
}

pub fn name_results(results: &[ListingView], term: &str) -> Markup {
    layout(
        "Search Results",
        html! {
            h1 { "Results for " q { (term) } }
            p { (results.len()) " listing(s) found." }
            (listing_table(results))
            p { a href="/search/name" { "New search" } }
        },
    )
}

pub fn property_form() -> Markup {
    layout(
        "Search by Property ID",
        html! {
            h1 { "Search by Property ID" }
            form method="post" action="/search/PropertyID" {
                label for="property_id" { "Property ID" }
                input type="text" id="property_id" name="property_id";
                button type="submit" { "Search" }
            }
        },
    )
}

/// Result page for the property-id lookup. `None` renders the dedicated
/// not-found state rather than a generic error page.
pub fn property_result(result: Option<&ListingView>, term: &str) -> Markup {
    layout(
        "Search Result",
        html! {
            h1 { "Result for " q { (term) } }
            @match result {
                Some(listing) => { (listing_detail(listing)) }
                None => {
                    p class="not-found" { "No listing found with that ID." }
                }
            }
            p { a href="/search/PropertyID" { "New search" } }
        },
    )
}

pub fn price_form(errors: &[String]) -> Markup {
    layout(
        "Search by Price",
        html! {
            h1 { "Search by Price Range" }
            (error_list(errors))
            form method="post" action="/viewData/price" {
                label for="minPrice" { "Minimum price" }
                input type="text" id="minPrice" name="minPrice";
                label for="maxPrice" { "Maximum price" }
                input type="text" id="maxPrice" name="maxPrice";
                button type="submit" { "Search" }
            }
        },
    )
}

pub fn price_results(
    results: &[ListingView],
    page: i64,
    total_pages: i64,
    min: f64,
    max: f64,
) -> Markup {
    let base = format!("/viewData/price?minPrice={min}&maxPrice={max}");
    layout(
        "Price Search Results",
        html! {
            h1 { "Listings from $" (min) " to $" (max) }
            (listing_table(results))
            (pager(&base, page, total_pages))
            p { a href="/viewData/price" { "New search" } }
        },
    )
}
