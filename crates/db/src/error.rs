use franchise_core::error::CoreError;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL SQLSTATE for `check_violation`.
const CHECK_VIOLATION: &str = "23514";

/// Error returned by every store implementation.
///
/// Constraint violations are normalized so callers can react to them the
/// same way regardless of the backend. Each carries the constraint name.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("check constraint violated: {0}")]
    CheckViolation(String),

    #[error("database error: {0}")]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => return DbError::UniqueViolation(constraint),
                Some(FOREIGN_KEY_VIOLATION) => return DbError::ForeignKeyViolation(constraint),
                Some(CHECK_VIOLATION) => return DbError::CheckViolation(constraint),
                _ => {}
            }
        }
        DbError::Sqlx(err)
    }
}

/// Default mapping for reads and for writes without a more specific context.
impl From<DbError> for CoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(constraint) => {
                CoreError::DuplicateName(format!("Name already registered ({constraint})"))
            }
            DbError::CheckViolation(constraint) => {
                CoreError::Validation(format!("Value rejected by constraint {constraint}"))
            }
            other => CoreError::StorageFailure(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn row_not_found_stays_generic() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert_matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound));
    }

    #[test]
    fn unique_violation_maps_to_duplicate_name() {
        let err = CoreError::from(DbError::UniqueViolation("uq_franchises_name_ci".into()));
        assert_matches!(err, CoreError::DuplicateName(msg) if msg.contains("uq_franchises_name_ci"));
    }

    #[test]
    fn backend_error_maps_to_storage_failure() {
        let err = CoreError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        assert_matches!(err, CoreError::StorageFailure(_));
    }
}
