use thiserror::Error;

use crate::domain::errors::RepositoryError;

/// Validation errors for review content.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewContentError {
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i32),

    #[error("Comment too short: minimum {min} characters, got {actual}")]
    CommentTooShort { min: usize, actual: usize },

    #[error("Comment too long: maximum {max} characters, got {actual}")]
    CommentTooLong { max: usize, actual: usize },
}

/// Top-level error for review operations.
#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    #[error("Invalid review: {0}")]
    InvalidContent(#[from] ReviewContentError),

    #[error("You have already submitted a review")]
    AlreadyReviewed,

    #[error("Admins cannot leave reviews")]
    AdminsCannotReview,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<RepositoryError> for ReviewError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(_) => ReviewError::AlreadyReviewed,
            RepositoryError::Database(msg) => ReviewError::Database(msg),
        }
    }
}
