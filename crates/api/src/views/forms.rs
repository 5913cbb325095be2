//! Insert, update, and delete form pages with their success views.

use maud::{html, Markup};
use stayview_core::listing::ListingView;

use super::{error_list, layout, listing_detail};

pub fn insert_form(errors: &[String]) -> Markup {
    layout(
        "Insert New Listing",
        html! {
            h1 { "Insert New Listing" }
            (error_list(errors))
            form method="post" action="/viewData/insert" {
                label for="id" { "Listing ID" }
                input type="text" id="id" name="id" required;
                label for="name" { "Name" }
                input type="text" id="name" name="name" required;
                label for="host_name" { "Host name" }
                input type="text" id="host_name" name="host_name";
                label for="neighbourhood" { "Neighbourhood" }
                input type="text" id="neighbourhood" name="neighbourhood";
                label for="room_type" { "Room type" }
                input type="text" id="room_type" name="room_type";
                label for="property_type" { "Property type" }
                input type="text" id="property_type" name="property_type";
                label for="price" { "Price" }
                input type="text" id="price" name="price" required;
                button type="submit" { "Insert" }
            }
        },
    )
}

pub fn insert_success(listing: &ListingView) -> Markup {
    layout(
        "Listing Inserted",
        html! {
            h1 { "Listing Inserted" }
            (listing_detail(listing))
            p { a href="/insert/product" { "Insert another" } }
        },
    )
}

pub fn update_form(errors: &[String]) -> Markup {
    layout(
        "Update Listing",
        html! {
            h1 { "Update Listing" }
            (error_list(errors))
            form method="post" action="/update/product" {
                label for="id" { "Listing ID" }
                input type="text" id="id" name="id" required;
                label for="name" { "New name (leave blank to keep)" }
                input type="text" id="name" name="name";
                label for="price" { "New price (leave blank to keep)" }
                input type="text" id="price" name="price";
                button type="submit" { "Update" }
            }
        },
    )
}

pub fn update_success(listing: &ListingView) -> Markup {
    layout(
        "Listing Updated",
        html! {
            h1 { "Listing Updated" }
            (listing_detail(listing))
            p { a href="/update/product" { "Update another" } }
        },
    )
}

pub fn delete_form(errors: &[String]) -> Markup {
    layout(
        "Delete a Listing",
        html! {
            h1 { "Delete a Listing" }
            (error_list(errors))
            form method="post" action="/delete/product" {
                label for="id" { "Listing ID" }
                input type="text" id="id" name="id" required;
                button type="submit" { "Delete" }
            }
        },
    )
}

pub fn delete_success(listing: &ListingView) -> Markup {
    layout(
        "Listing Deleted",
        html! {
            h1 { "Listing Deleted" }
            p { "The following listing was removed:" }
            (listing_detail(listing))
        },
    )
}
