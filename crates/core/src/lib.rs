//! Domain logic for the listings browser.
//!
//! Everything in this crate is a pure function of its inputs: record
//! normalization, price coercion, pagination arithmetic, and the
//! search/filter predicates. Store access and HTTP concerns live in the
//! `db` and `api` crates.

pub mod error;
pub mod filter;
pub mod listing;
pub mod pagination;
pub mod price;
pub mod types;
