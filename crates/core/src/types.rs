/// All database primary keys are PostgreSQL BIGSERIAL; external listing ids
/// share the same width.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
