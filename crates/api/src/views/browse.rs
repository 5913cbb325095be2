//! Browse pages: full table, mapped view, and the non-empty-name view.

use maud::{html, Markup};
use stayview_core::listing::ListingView;

use super::{layout, listing_table, pager};

pub fn all_data(listings: &[ListingView], page: i64, total_pages: i64) -> Markup {
    layout(
        "All Listings",
        html! {
            h1 { "All Listings" }
            (listing_table(listings))
            (pager("/allData", page, total_pages))
        },
    )
}

pub fn view_data(listings: &[ListingView], page: i64, total_pages: i64) -> Markup {
    layout(
        "View Listings",
        html! {
            h1 { "View Listings" }
            (listing_table(listings))
            (pager("/viewData", page, total_pages))
        },
    )
}

pub fn clean_data(listings: &[ListingView], page: i64, total_pages: i64) -> Markup {
    layout(
        "Named Listings",
        html! {
            h1 { "Named Listings" }
            p { "Only listings with a non-empty name." }
            (listing_table(listings))
            (pager("/viewData/clean", page, total_pages))
        },
    )
}
