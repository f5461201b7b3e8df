use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewWithAuthor;
use crate::domain::user::models::UserId;

/// Persistence operations for reviews.
///
/// The one-review-per-user rule is backed by a unique index on the author;
/// `create` surfaces violations as `Conflict`.
#[async_trait]
pub trait ReviewRepository: Send + Sync + 'static {
    /// Persist a new review.
    ///
    /// # Errors
    /// * `Conflict` - The author already has a review
    /// * `Database` - Database operation failed
    async fn create(&self, review: Review) -> Result<Review, RepositoryError>;

    /// Retrieve a user's own review, if any.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Review>, RepositoryError>;

    /// Retrieve all reviews joined with author details, newest first.
    async fn list_with_authors(&self) -> Result<Vec<ReviewWithAuthor>, RepositoryError>;
}
