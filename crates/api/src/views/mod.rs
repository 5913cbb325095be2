//! Server-rendered views.
//!
//! Pages are composed with `maud`; every page goes through [`layout`].
//! Handlers pass already-normalized [`ListingView`] values in, so the
//! templates never see raw documents or legacy keys.

pub mod browse;
pub mod forms;
pub mod search;

use maud::{html, Markup, DOCTYPE};
use stayview_core::listing::ListingView;

/// Shared page chrome: doctype, head, nav, footer.
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Stayview" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header {
                    h3 { a href="/" { "Stayview" } }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/about" { "About" } }
                            li { a href="/viewData" { "Browse" } }
                            li { a href="/search/name" { "Search by Name" } }
                            li { a href="/viewData/price" { "Search by Price" } }
                            li { a href="/insert/product" { "Insert" } }
                            li { a href="/update/product" { "Update" } }
                            li { a href="/delete/product" { "Delete" } }
                        }
                    }
                }
                main { (content) }
            }
        }
    }
}

pub fn home() -> Markup {
    layout(
        "Home",
        html! {
            h1 { "Stayview" }
            p { "Browse, search, and manage the listings collection." }
            ul {
                li { a href="/allData" { "All listings" } }
                li { a href="/viewData/clean" { "Listings with names" } }
            }
        },
    )
}

pub fn about() -> Markup {
    layout(
        "About",
        html! {
            h1 { "About" }
            p {
                "A small browser over a single collection of rental "
                "listings, with name and price search."
            }
        },
    )
}

/// Inline validation errors rendered above a form.
pub(crate) fn error_list(errors: &[String]) -> Markup {
    html! {
        @if !errors.is_empty() {
            ul class="errors" {
                @for error in errors {
                    li { (error) }
                }
            }
        }
    }
}

/// The standard listings table.
pub(crate) fn listing_table(listings: &[ListingView]) -> Markup {
    html! {
        @if listings.is_empty() {
            p { "No listings to show." }
        } @else {
            table {
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Host" }
                        th { "Neighbourhood" }
                        th { "Room type" }
                        th { "Price" }
                        th { "Image" }
                    }
                }
                tbody {
                    @for listing in listings {
                        tr {
                            td { (listing.id) }
                            td { (listing.name) }
                            td { (listing.host_name) }
                            td { (listing.neighbourhood) }
                            td { (listing.room_type) }
                            td { (listing.price) }
                            td {
                                @if let Some(url) = &listing.image_url {
                                    img src=(url) alt=(listing.name) width="80";
                                } @else {
                                    "none"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Previous/next pager. `base` already contains any fixed query
/// parameters (e.g. price bounds); the page number is appended.
pub(crate) fn pager(base: &str, page: i64, total_pages: i64) -> Markup {
    let sep = if base.contains('?') { '&' } else { '?' };
    html! {
        div class="pager" {
            @if page > 1 {
                a href=(format!("{base}{sep}page={}", page - 1)) { "Previous" }
            }
            span { "Page " (page) " of " (total_pages.max(1)) }
            @if page < total_pages {
                a href=(format!("{base}{sep}page={}", page + 1)) { "Next" }
            }
        }
    }
}

/// A single listing rendered as a definition table (detail views and
/// mutation success pages).
pub(crate) fn listing_detail(listing: &ListingView) -> Markup {
    html! {
        table class="detail" {
            tr { th { "ID" } td { (listing.id) } }
            tr { th { "Name" } td { (listing.name) } }
            tr { th { "Host" } td { (listing.host_name) } }
            tr { th { "Neighbourhood group" } td { (listing.neighbourhood_group) } }
            tr { th { "Neighbourhood" } td { (listing.neighbourhood) } }
            tr { th { "Room type" } td { (listing.room_type) } }
            tr { th { "Property type" } td { (listing.property_type) } }
            tr { th { "Price" } td { (listing.price) } }
            @if let Some(url) = &listing.image_url {
                tr { th { "Image" } td { img src=(url) alt=(listing.name) width="160"; } }
            }
        }
    }
}
