use thiserror::Error;

/// Error for repository operations shared by every aggregate.
///
/// `Conflict` means a unique constraint rejected the write; the string is the
/// offending key value, never a raw driver error object.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("Duplicate key: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}
