use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database unavailable: {0}")]
    Unavailable(String),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Query error: {0}")]
    Query(sqlx::Error),
}

impl DatabaseError {
    /// Whether the failure came from not being able to reach the database at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DatabaseError::Unavailable(_))
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => DatabaseError::Unavailable(err.to_string()),
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                DatabaseError::ConstraintViolation(db_err.message().to_string())
            }
            other => DatabaseError::Query(other),
        }
    }
}
