//! Row types and DTOs.

pub mod listing;
