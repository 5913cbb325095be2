//! Repository for the `listings` table.

use serde_json::Value;
use sqlx::PgPool;
use stayview_core::types::DbId;

use crate::models::listing::ListingRecord;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, listing_id, doc, created_at, updated_at";

/// Predicate for records with a non-empty name under either key
/// generation. Used by the "clean" browse view.
const NAMED_PREDICATE: &str = "COALESCE(NULLIF(doc->>'name', ''), NULLIF(doc->>'NAME', '')) IS NOT NULL";

/// Provides CRUD and retrieval operations for listings.
///
/// All external identification goes through `listing_id`; the internal
/// `id` column never leaves this crate.
pub struct ListingRepo;

impl ListingRepo {
    /// Total number of listings.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM listings")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Number of listings with a non-empty name.
    pub async fn count_named(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM listings WHERE {NAMED_PREDICATE}");
        let (count,): (i64,) = sqlx::query_as(&query).fetch_one(pool).await?;
        Ok(count)
    }

    /// One page of listings, ordered by external id ascending.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ListingRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM listings ORDER BY listing_id ASC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ListingRecord>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// One page of listings with a non-empty name, ordered by external id.
    pub async fn list_named_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ListingRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM listings WHERE {NAMED_PREDICATE}
             ORDER BY listing_id ASC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ListingRecord>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// The full candidate set in iteration order. The in-process price
    /// filter and the name search run over this; cost is linear in
    /// collection size per request.
    pub async fn fetch_all(pool: &PgPool) -> Result<Vec<ListingRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM listings ORDER BY listing_id ASC");
        sqlx::query_as::<_, ListingRecord>(&query).fetch_all(pool).await
    }

    /// Find a listing by its external id.
    pub async fn find_by_listing_id(
        pool: &PgPool,
        listing_id: DbId,
    ) -> Result<Option<ListingRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM listings WHERE listing_id = $1");
        sqlx::query_as::<_, ListingRecord>(&query)
            .bind(listing_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new listing document, returning the created row.
    ///
    /// A duplicate external id violates `uq_listings_listing_id`, which
    /// the API layer maps to a conflict response.
    pub async fn insert(
        pool: &PgPool,
        listing_id: DbId,
        doc: &Value,
    ) -> Result<ListingRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO listings (listing_id, doc) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ListingRecord>(&query)
            .bind(listing_id)
            .bind(doc)
            .fetch_one(pool)
            .await
    }

    /// Merge a partial patch into a listing's document.
    ///
    /// Returns `None` if no row with the given external id exists. Legacy
    /// key dual-writing happens when the patch is built, not here.
    pub async fn patch(
        pool: &PgPool,
        listing_id: DbId,
        patch: &Value,
    ) -> Result<Option<ListingRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE listings SET doc = doc || $2, updated_at = NOW()
             WHERE listing_id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ListingRecord>(&query)
            .bind(listing_id)
            .bind(patch)
            .fetch_optional(pool)
            .await
    }

    /// Delete a listing by external id, returning the removed row so
    /// callers can show what was deleted. `None` if nothing matched.
    pub async fn delete(
        pool: &PgPool,
        listing_id: DbId,
    ) -> Result<Option<ListingRecord>, sqlx::Error> {
        let query = format!("DELETE FROM listings WHERE listing_id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ListingRecord>(&query)
            .bind(listing_id)
            .fetch_optional(pool)
            .await
    }
}
