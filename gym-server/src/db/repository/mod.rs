//! Data access layer.
//!
//! Free async functions over a `SqlitePool`, one module per table. SQL
//! lives here and nowhere else; handlers pass typed values in and get
//! models back. Multi-table writes run inside a transaction owned by the
//! repository function that needs them.

use thiserror::Error;

pub mod attendance;
pub mod feedback;
pub mod member;
pub mod payment;
pub mod progress;
pub mod trainer;
pub mod user;
pub mod workout;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}
