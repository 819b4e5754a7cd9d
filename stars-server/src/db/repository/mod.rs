//! Repository Module
//!
//! One repository per collection. Repositories own field validation and
//! translate empty matches into [`RepoError::NotFound`].

pub mod class;
pub mod person;
pub mod settings;
pub mod star;

// Re-exports
pub use class::ClassRepository;
pub use person::{FieldRetention, PersonPolicy, PersonRepository};
pub use settings::SettingsRepository;
pub use star::StarRepository;

use shared::util::parse_record_id;
use thiserror::Error;

/// Repository error types
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

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Validate a caller-supplied record id
pub(crate) fn record_key(raw: &str) -> RepoResult<String> {
    parse_record_id(raw).ok_or_else(|| RepoError::Validation("Invalid ID format".to_string()))
}

/// `Missing field: <name>`
pub(crate) fn missing_field(field: &str) -> RepoError {
    RepoError::Validation(format!("Missing field: {field}"))
}
