//! Search and filter predicates.
//!
//! Name search and price range search are mutually exclusive per request.
//! Both run over the candidate set in store iteration order (`id`
//! ascending); the price filter is evaluated in-process over the full
//! collection, so its cost is linear in collection size per request.

use serde_json::Value;

use crate::error::CoreError;
use crate::listing::raw_name;
use crate::price;

/// Name search results are capped at this many records.
pub const SEARCH_RESULT_CAP: usize = 50;

/// Validate and trim a name search term. Empty after trimming is a
/// validation error, not an empty result set.
pub fn search_term(input: &str) -> Result<&str, CoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Property name is required".into()));
    }
    Ok(trimmed)
}

/// Case-insensitive substring match.
pub fn name_contains(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(&needle.to_lowercase())
}

/// Name predicate over a stored document. Documents with no usable name
/// under either key generation never match.
pub fn matches_name(doc: &Value, needle: &str) -> bool {
    raw_name(doc).is_some_and(|name| name_contains(name, needle))
}

/// An inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Inclusive at both bounds.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// True for documents whose coerced price lies in the range.
    pub fn matches(&self, doc: &Value) -> bool {
        self.contains(price::coerce(doc.get("price")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn search_term_trims() {
        assert_eq!(search_term("  loft  ").unwrap(), "loft");
    }

    #[test]
    fn empty_search_term_is_validation_error() {
        assert_matches!(search_term(""), Err(CoreError::Validation(_)));
        assert_matches!(search_term("   "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        assert!(name_contains("Cozy LOFT Studio", "loft"));
        assert!(name_contains("Cozy LOFT Studio", "COZY"));
        assert!(!name_contains("Cozy LOFT Studio", "penthouse"));
    }

    #[test]
    fn matches_name_reads_either_key_generation() {
        assert!(matches_name(&json!({ "NAME": "Cozy LOFT Studio" }), "loft"));
        assert!(matches_name(&json!({ "name": "Sunny loft" }), "LOFT"));
        assert!(!matches_name(&json!({ "name": "Garden flat" }), "loft"));
        assert!(!matches_name(&json!({}), "loft"));
    }

    #[test]
    fn price_range_inclusive_at_both_bounds() {
        let range = PriceRange { min: 100.0, max: 200.0 };
        assert!(range.contains(100.0));
        assert!(range.contains(200.0));
        assert!(!range.contains(99.99));
        assert!(!range.contains(200.01));
    }

    #[test]
    fn currency_string_at_exact_bound_is_included() {
        let range = PriceRange { min: 100.0, max: 100.0 };
        assert!(range.matches(&json!({ "price": "$100.00" })));
    }

    #[test]
    fn range_match_coerces_every_stored_shape() {
        let range = PriceRange { min: 100.0, max: 200.0 };
        assert!(range.matches(&json!({ "price": 150 })));
        assert!(range.matches(&json!({ "price": "$175.50" })));
        // Unparseable and absent prices coerce to 0 and fall outside.
        assert!(!range.matches(&json!({ "price": "no idea" })));
        assert!(!range.matches(&json!({})));
    }

    #[test]
    fn absent_price_matches_zero_floor() {
        let range = PriceRange { min: 0.0, max: 50.0 };
        assert!(range.matches(&json!({})));
    }
}
