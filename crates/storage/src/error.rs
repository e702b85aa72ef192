use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True when the underlying Postgres error is a unique violation,
    /// e.g. a duplicate round number for a team.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_only_matches_database_errors() {
        assert!(!StorageError::NotFound.is_unique_violation());
        assert!(!StorageError::ConstraintViolation("duplicate round".into()).is_unique_violation());
        assert!(!StorageError::Database(sqlx::Error::RowNotFound).is_unique_violation());
    }
}
