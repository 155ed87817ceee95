/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Product stock quantity. Stored as INTEGER with a non-negative check.
pub type Stock = i32;
