use crate::db::errors::DbError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Malformed or invalid input; the message is shown to the client
    #[error("{message}")]
    BadRequest { message: String },

    /// No row for the given id
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: String, id: String },

    /// A named operation failed; details are only logged
    #[error("Failed to {operation}")]
    Internal { operation: String },

    /// Constraint violation or driver failure from a repository
    #[error(transparent)]
    Database(#[from] DbError),

    /// Anything else, logged with its full cause chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),

    /// The request clashes with existing state
    #[error("Conflict: {message}")]
    Conflict { message: String },
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                DbError::UniqueViolation { .. } => StatusCode::CONFLICT,
                DbError::ForeignKeyViolation { .. } => StatusCode::BAD_REQUEST,
                DbError::CheckViolation { .. } => StatusCode::BAD_REQUEST,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Conflict { .. } => StatusCode::CONFLICT,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::BadRequest { message } => message.clone(),
            Error::NotFound { resource, .. } => format!("{resource} not found"),
            Error::Internal { operation } => format!("Failed to {operation}"),
            Error::Database(db_err) => match db_err {
                DbError::NotFound => "Resource not found".to_string(),
                DbError::UniqueViolation { constraint, table, .. } => match (table.as_deref(), constraint.as_deref()) {
                    (Some("users"), Some(c)) if c.contains("username") => "This username is already taken".to_string(),
                    (Some("profiles"), Some(c)) if c.contains("user_id") => "This user already has a profile".to_string(),
                    _ => "Resource already exists".to_string(),
                },
                DbError::ForeignKeyViolation { .. } => "Invalid reference to related resource".to_string(),
                DbError::CheckViolation { constraint, .. } => match constraint.as_deref() {
                    Some("skills_percentage_range") => "percentage must be between 0 and 100".to_string(),
                    _ => "Invalid data provided".to_string(),
                },
                DbError::Other(_) => "Database error occurred".to_string(),
            },
            Error::Other(_) => "Internal server error".to_string(),
            Error::Conflict { message } => message.clone(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // 5xx at error, constraint hits at warn, plain client mistakes at debug
        match &self {
            Error::Database(DbError::Other(_)) | Error::Internal { .. } | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(_) => {
                tracing::warn!("Database constraint error: {}", self);
            }
            Error::BadRequest { .. } | Error::NotFound { .. } => {
                tracing::debug!("Client error: {}", self);
            }
            Error::Conflict { .. } => {
                tracing::warn!("Conflict error: {}", self);
            }
        }

        let body = json!({ "error": self.user_message() });
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::Database(err.into())
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// Attach the name of the failed operation to a fallible result.
///
/// Unexpected failures (driver, pool, I/O) are logged with their full cause and replaced by
/// [`Error::Internal`], so the client only sees "Failed to <operation>". Constraint violations
/// and client errors pass through untouched so they keep their 4xx mapping.
pub trait OperationContext<T> {
    fn during(self, operation: &str) -> Result<T>;
}

impl<T, E> OperationContext<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn during(self, operation: &str) -> Result<T> {
        self.map_err(|e| match e.into() {
            Error::Database(DbError::Other(source)) | Error::Other(source) => {
                tracing::error!("Failed to {operation}: {source:#}");
                Error::Internal {
                    operation: operation.to_string(),
                }
            }
            other => other,
        })
    }
}

/// Result of a route handler or anything it calls
pub type Result<T> = std::result::Result<T, Error>;
