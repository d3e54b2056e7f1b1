//! Error types for lightbnb-db

use thiserror::Error;

pub type Result<T, E = QueryError> = std::result::Result<T, E>;

/// Failure of a single query against the store.
///
/// A missing row is not an error; lookups return `Ok(None)` instead.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("conflict: {constraint}")]
    Conflict { constraint: String },
}

impl QueryError {
    /// Map an insert failure, singling out unique-constraint violations.
    pub(crate) fn from_insert(err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db) if db.is_unique_violation() => Self::Conflict {
                constraint: db.constraint().unwrap_or("unique").to_owned(),
            },
            _ => Self::Database(err),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
