//! Listing row type and DTOs.

use serde::Deserialize;
use serde_json::{Map, Value};
use sqlx::FromRow;
use stayview_core::error::CoreError;
use stayview_core::listing::legacy_alias;
use stayview_core::price;
use stayview_core::types::{DbId, Timestamp};

/// A row from the `listings` table.
///
/// `id` is storage-internal and never serialized; every external surface
/// identifies records by `listing_id`.
#[derive(Debug, Clone, FromRow)]
pub struct ListingRecord {
    pub id: DbId,
    pub listing_id: DbId,
    pub doc: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new listing.
///
/// `price` stays a raw JSON value so submissions may send either a number
/// or a currency-formatted string; validation parses it strictly.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListing {
    pub id: DbId,
    pub name: String,
    pub host_id: Option<DbId>,
    pub host_name: Option<String>,
    pub neighbourhood_group: Option<String>,
    pub neighbourhood: Option<String>,
    pub price: Value,
    pub room_type: Option<String>,
    pub property_type: Option<String>,
    pub thumbnail: Option<String>,
    pub images: Option<Vec<String>>,
}

impl CreateListing {
    /// Validate the submission and build the stored document.
    ///
    /// New documents carry canonical keys only; optional text fields
    /// default to the empty string.
    pub fn into_doc(self) -> Result<Value, CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("name is required".into()));
        }
        let price = price::parse_input(&self.price)?;

        let mut doc = Map::new();
        doc.insert("id".into(), Value::from(self.id));
        doc.insert("name".into(), Value::from(self.name));
        if let Some(host_id) = self.host_id {
            doc.insert("host_id".into(), Value::from(host_id));
        }
        doc.insert("host_name".into(), Value::from(self.host_name.unwrap_or_default()));
        doc.insert(
            "neighbourhood_group".into(),
            Value::from(self.neighbourhood_group.unwrap_or_default()),
        );
        doc.insert(
            "neighbourhood".into(),
            Value::from(self.neighbourhood.unwrap_or_default()),
        );
        doc.insert("price".into(), Value::from(price));
        doc.insert("room_type".into(), Value::from(self.room_type.unwrap_or_default()));
        doc.insert(
            "property_type".into(),
            Value::from(self.property_type.unwrap_or_default()),
        );
        if let Some(thumbnail) = self.thumbnail {
            doc.insert("thumbnail".into(), Value::from(thumbnail));
        }
        if let Some(images) = self.images {
            doc.insert("images".into(), Value::from(images));
        }
        Ok(Value::Object(doc))
    }
}

/// DTO for a partial update. All fields are optional; omitted fields are
/// left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateListing {
    pub name: Option<String>,
    pub host_id: Option<DbId>,
    pub host_name: Option<String>,
    pub neighbourhood_group: Option<String>,
    pub neighbourhood: Option<String>,
    pub price: Option<Value>,
    pub room_type: Option<String>,
    pub property_type: Option<String>,
    pub thumbnail: Option<String>,
}

impl UpdateListing {
    /// Validate the submission and build the JSONB patch merged into the
    /// stored document.
    ///
    /// Fields with a legacy key variant are written under both keys. An
    /// empty patch is legal and leaves the record unchanged.
    pub fn into_patch(self) -> Result<Value, CoreError> {
        let mut patch = Map::new();

        let mut set_text = |field: &str, value: Option<String>| {
            if let Some(value) = value {
                patch.insert(field.into(), Value::from(value.clone()));
                if let Some(alias) = legacy_alias(field) {
                    patch.insert(alias.into(), Value::from(value));
                }
            }
        };

        set_text("name", self.name);
        set_text("host_name", self.host_name);
        set_text("neighbourhood_group", self.neighbourhood_group);
        set_text("neighbourhood", self.neighbourhood);
        set_text("room_type", self.room_type);
        set_text("property_type", self.property_type);

        if let Some(host_id) = self.host_id {
            patch.insert("host_id".into(), Value::from(host_id));
        }
        if let Some(thumbnail) = self.thumbnail {
            patch.insert("thumbnail".into(), Value::from(thumbnail));
        }
        if let Some(raw) = self.price {
            let price = price::parse_input(&raw)?;
            patch.insert("price".into(), Value::from(price));
        }

        Ok(Value::Object(patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn create_input() -> CreateListing {
        CreateListing {
            id: 9001,
            name: "Garden Flat".into(),
            host_id: Some(12),
            host_name: Some("Ana".into()),
            neighbourhood_group: None,
            neighbourhood: Some("Queens".into()),
            price: json!("$1,250"),
            room_type: Some("Entire home/apt".into()),
            property_type: None,
            thumbnail: None,
            images: None,
        }
    }

    #[test]
    fn create_builds_canonical_doc() {
        let doc = create_input().into_doc().unwrap();

        assert_eq!(doc["id"], 9001);
        assert_eq!(doc["name"], "Garden Flat");
        assert_eq!(doc["price"], 1250.0);
        // Canonical keys only; no legacy variants in new documents.
        assert!(doc.get("NAME").is_none());
        assert!(doc.get("host name").is_none());
        // Omitted optionals default to the empty string.
        assert_eq!(doc["neighbourhood_group"], "");
        assert_eq!(doc["property_type"], "");
    }

    #[test]
    fn create_rejects_blank_name() {
        let mut input = create_input();
        input.name = "   ".into();
        assert_matches!(input.into_doc(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn create_rejects_malformed_price() {
        let mut input = create_input();
        input.price = json!("call me");
        assert_matches!(input.into_doc(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn create_rejects_negative_price() {
        let mut input = create_input();
        input.price = json!(-1);
        assert_matches!(input.into_doc(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn update_dual_writes_legacy_keys() {
        let patch = UpdateListing {
            name: Some("Renamed".into()),
            host_name: Some("Bo".into()),
            room_type: Some("Private room".into()),
            ..Default::default()
        }
        .into_patch()
        .unwrap();

        assert_eq!(patch["name"], "Renamed");
        assert_eq!(patch["NAME"], "Renamed");
        assert_eq!(patch["host_name"], "Bo");
        assert_eq!(patch["host name"], "Bo");
        assert_eq!(patch["room_type"], "Private room");
        assert_eq!(patch["room type"], "Private room");
    }

    #[test]
    fn update_normalizes_price_string_to_number() {
        let patch = UpdateListing {
            price: Some(json!("$2,000.50")),
            ..Default::default()
        }
        .into_patch()
        .unwrap();

        assert_eq!(patch["price"], 2000.5);
    }

    #[test]
    fn update_without_alias_writes_canonical_only() {
        let patch = UpdateListing {
            neighbourhood: Some("Harlem".into()),
            ..Default::default()
        }
        .into_patch()
        .unwrap();

        assert_eq!(patch["neighbourhood"], "Harlem");
        assert_eq!(patch.as_object().unwrap().len(), 1);
    }

    #[test]
    fn empty_update_is_empty_patch() {
        let patch = UpdateListing::default().into_patch().unwrap();
        assert!(patch.as_object().unwrap().is_empty());
    }

    #[test]
    fn update_rejects_bad_price() {
        let result = UpdateListing {
            price: Some(json!("free??")),
            ..Default::default()
        }
        .into_patch();
        assert_matches!(result, Err(CoreError::Validation(_)));
    }
}
