use thiserror::Error;

/// Storage failures, split into the constraint violations callers map to client errors and everything else
#[derive(Error, Debug)]
pub enum DbError {
    /// Entity not found by the given identifier
    #[error("Entity not found")]
    NotFound,

    /// Unique constraint violation
    #[error("Unique constraint violation")]
    UniqueViolation {
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Foreign key constraint violation
    #[error("Foreign key constraint violation")]
    ForeignKeyViolation {
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Check constraint violation
    #[error("Check constraint violation")]
    CheckViolation {
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Connectivity, driver and decode failures
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Constraint name, table and message of a violation, as reported by Postgres.
fn violation_parts(db_err: &dyn sqlx::error::DatabaseError) -> (Option<String>, Option<String>, String) {
    (
        db_err.constraint().map(str::to_owned),
        db_err.table().map(str::to_owned),
        db_err.message().to_owned(),
    )
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        let sqlx::Error::Database(db_err) = &err else {
            return match err {
                sqlx::Error::RowNotFound => DbError::NotFound,
                // pool timeouts, I/O, protocol and decode errors
                other => DbError::Other(other.into()),
            };
        };

        let (constraint, table, message) = violation_parts(&**db_err);
        if db_err.is_unique_violation() {
            DbError::UniqueViolation { constraint, table, message }
        } else if db_err.is_foreign_key_violation() {
            DbError::ForeignKeyViolation { constraint, table, message }
        } else if db_err.is_check_violation() {
            DbError::CheckViolation { constraint, table, message }
        } else {
            DbError::Other(err.into())
        }
    }
}

/// Result of a repository call
pub type Result<T> = std::result::Result<T, DbError>;
