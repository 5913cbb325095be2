//! Field normalization for listing documents.
//!
//! The collection holds two generations of records: the original import,
//! which used uppercase/spaced keys (`NAME`, `host name`, `room type`), and
//! newly inserted records using canonical lowercase keys. [`normalize`]
//! reconciles both into one output shape.
//!
//! The canonical-to-legacy mapping is a table, not per-field branching, so
//! adding a field (or a third key generation) is a one-line change.

use serde::Serialize;
use serde_json::Value;

use crate::types::DbId;

/// Placeholder rendered for any field that is absent, empty, or falsy.
pub const PLACEHOLDER: &str = "N/A";

/// Text fields of the canonical output shape, each with its candidate source
/// keys in preference order (canonical first, then legacy variants).
const TEXT_FIELD_SOURCES: &[(&str, &[&str])] = &[
    ("name", &["name", "NAME"]),
    ("host_name", &["host_name", "host name"]),
    ("neighbourhood_group", &["neighbourhood_group"]),
    ("neighbourhood", &["neighbourhood"]),
    ("room_type", &["room_type", "room type"]),
    ("property_type", &["property_type"]),
];

/// A listing mapped to the canonical output shape.
///
/// The key set is fixed regardless of which input keys were populated.
/// `price` is kept as a display string because legacy records store
/// currency-formatted text; numeric comparisons go through
/// [`crate::price::coerce`] instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub id: DbId,
    pub name: String,
    pub host_id: Option<DbId>,
    pub host_name: String,
    pub neighbourhood_group: String,
    pub neighbourhood: String,
    pub room_type: String,
    pub property_type: String,
    pub price: String,
    pub image_url: Option<String>,
}

/// True for values the normalizer treats as "not there": null, empty
/// string, zero, false.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(b) => !b,
        _ => false,
    }
}

/// First non-falsy value among the candidate keys, in order.
fn first_present<'a>(doc: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|key| doc.get(key))
        .find(|v| !is_falsy(v))
}

fn text_field(doc: &Value, candidates: &[&str]) -> String {
    match first_present(doc, candidates) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// The display image: `thumbnail` if present, else the first element of
/// `images`, else absent.
fn image_url(doc: &Value) -> Option<String> {
    if let Some(Value::String(thumb)) = doc.get("thumbnail") {
        if !thumb.is_empty() {
            return Some(thumb.clone());
        }
    }
    match doc.get("images").and_then(Value::as_array)?.first()? {
        Value::String(first) if !first.is_empty() => Some(first.clone()),
        _ => None,
    }
}

/// Price as stored, rendered for display. Falsy prices (including a stored
/// `0`) show the placeholder; the range filter sees the coerced number
/// instead.
fn price_display(doc: &Value) -> String {
    match doc.get("price") {
        Some(v) if !is_falsy(v) => match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
        _ => PLACEHOLDER.to_string(),
    }
}

/// Candidate source keys for a canonical text field.
///
/// Panics if the field is not in the table; the table and [`ListingView`]
/// are maintained together.
fn sources(field: &str) -> &'static [&'static str] {
    TEXT_FIELD_SOURCES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, candidates)| *candidates)
        .unwrap_or_else(|| panic!("unmapped canonical field: {field}"))
}

/// The legacy key variant for a canonical field, if one exists.
///
/// Partial updates dual-write both variants so records still carrying
/// legacy keys read back the new value regardless of which key a consumer
/// looks at.
pub fn legacy_alias(field: &str) -> Option<&'static str> {
    sources(field).get(1).copied()
}

/// Map a stored document to the canonical output shape.
///
/// Pure and infallible: absent data degrades to [`PLACEHOLDER`], never to an
/// error. `id` comes from the row, not the document, so the output is
/// correct even for documents whose embedded id drifted.
pub fn normalize(id: DbId, doc: &Value) -> ListingView {
    ListingView {
        id,
        name: text_field(doc, sources("name")),
        host_id: first_present(doc, &["host_id", "host id"]).and_then(Value::as_i64),
        host_name: text_field(doc, sources("host_name")),
        neighbourhood_group: text_field(doc, sources("neighbourhood_group")),
        neighbourhood: text_field(doc, sources("neighbourhood")),
        room_type: text_field(doc, sources("room_type")),
        property_type: text_field(doc, sources("property_type")),
        price: price_display(doc),
        image_url: image_url(doc),
    }
}

/// The best available name for a document, without placeholder substitution.
/// Used by the name search predicate, where a missing name simply never
/// matches.
pub fn raw_name(doc: &Value) -> Option<&str> {
    match first_present(doc, &["name", "NAME"]) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_keys_are_mapped() {
        let doc = json!({
            "NAME": "Cozy LOFT Studio",
            "host name": "Maria",
            "room type": "Entire home/apt",
            "neighbourhood": "Brooklyn",
            "price": "$1,200",
        });
        let view = normalize(101, &doc);

        assert_eq!(view.id, 101);
        assert_eq!(view.name, "Cozy LOFT Studio");
        assert_eq!(view.host_name, "Maria");
        assert_eq!(view.room_type, "Entire home/apt");
        assert_eq!(view.neighbourhood, "Brooklyn");
        assert_eq!(view.price, "$1,200");
    }

    #[test]
    fn canonical_keys_win_over_legacy() {
        let doc = json!({
            "name": "New Name",
            "NAME": "Old Name",
            "host_name": "New Host",
            "host name": "Old Host",
        });
        let view = normalize(1, &doc);

        assert_eq!(view.name, "New Name");
        assert_eq!(view.host_name, "New Host");
    }

    #[test]
    fn empty_canonical_falls_back_to_legacy() {
        let doc = json!({ "name": "", "NAME": "Imported Name" });
        assert_eq!(normalize(1, &doc).name, "Imported Name");
    }

    #[test]
    fn absent_fields_become_placeholder() {
        let view = normalize(7, &json!({}));

        assert_eq!(view.name, PLACEHOLDER);
        assert_eq!(view.host_name, PLACEHOLDER);
        assert_eq!(view.neighbourhood_group, PLACEHOLDER);
        assert_eq!(view.neighbourhood, PLACEHOLDER);
        assert_eq!(view.room_type, PLACEHOLDER);
        assert_eq!(view.property_type, PLACEHOLDER);
        assert_eq!(view.price, PLACEHOLDER);
        assert_eq!(view.host_id, None);
        assert_eq!(view.image_url, None);
    }

    #[test]
    fn output_key_set_is_fixed() {
        // Same serialized key set whether the input was legacy, canonical,
        // or empty.
        let keys = |doc: &Value| -> Vec<String> {
            let serialized = serde_json::to_value(normalize(1, doc)).unwrap();
            serialized.as_object().unwrap().keys().cloned().collect()
        };

        let legacy = keys(&json!({ "NAME": "a", "host name": "b" }));
        let canonical = keys(&json!({ "name": "a", "host_name": "b" }));
        let empty = keys(&json!({}));

        assert_eq!(legacy, canonical);
        assert_eq!(legacy, empty);
    }

    #[test]
    fn thumbnail_preferred_over_images() {
        let doc = json!({ "thumbnail": "t.jpg", "images": ["a.jpg", "b.jpg"] });
        assert_eq!(normalize(1, &doc).image_url, Some("t.jpg".to_string()));
    }

    #[test]
    fn first_image_when_no_thumbnail() {
        let doc = json!({ "images": ["a.jpg", "b.jpg"] });
        assert_eq!(normalize(1, &doc).image_url, Some("a.jpg".to_string()));
    }

    #[test]
    fn empty_images_yield_no_image() {
        assert_eq!(normalize(1, &json!({ "images": [] })).image_url, None);
    }

    #[test]
    fn numeric_price_displayed_as_text() {
        assert_eq!(normalize(1, &json!({ "price": 350 })).price, "350");
    }

    #[test]
    fn zero_price_displays_placeholder() {
        assert_eq!(normalize(1, &json!({ "price": 0 })).price, PLACEHOLDER);
    }

    #[test]
    fn raw_name_prefers_canonical_and_skips_empty() {
        assert_eq!(raw_name(&json!({ "name": "A", "NAME": "B" })), Some("A"));
        assert_eq!(raw_name(&json!({ "name": "", "NAME": "B" })), Some("B"));
        assert_eq!(raw_name(&json!({})), None);
    }
}
