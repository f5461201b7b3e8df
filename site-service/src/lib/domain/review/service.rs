use std::sync::Arc;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::Comment;
use crate::domain::review::models::Rating;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewWithAuthor;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;

/// Review submission rules: admins cannot review, one review per user.
///
/// The author's role comes from the request identity (token claims), not a
/// store lookup; a freshly promoted admin can still review until they obtain
/// a new token, consistent with the identity-staleness trade-off.
pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { reviews }
    }

    /// Submit a review on behalf of the authenticated user.
    ///
    /// # Errors
    /// * `AdminsCannotReview` - The author holds the admin role
    /// * `AlreadyReviewed` - The author already has a review
    /// * `Database` - Store operation failed
    pub async fn submit(
        &self,
        author: UserId,
        role: Role,
        rating: Rating,
        comment: Comment,
    ) -> Result<Review, ReviewError> {
        if role == Role::Admin {
            return Err(ReviewError::AdminsCannotReview);
        }

        if self.reviews.find_by_user(&author).await?.is_some() {
            return Err(ReviewError::AlreadyReviewed);
        }

        // The unique index on the author still arbitrates concurrent submits
        let review = self.reviews.create(Review::new(author, rating, comment)).await?;

        tracing::info!(user_id = %author, "Review submitted");

        Ok(review)
    }

    /// Retrieve all reviews with author details, newest first.
    pub async fn list(&self) -> Result<Vec<ReviewWithAuthor>, ReviewError> {
        Ok(self.reviews.list_with_authors().await?)
    }

    /// Retrieve the authenticated user's own review, if any.
    pub async fn find_own(&self, author: &UserId) -> Result<Option<Review>, ReviewError> {
        Ok(self.reviews.find_by_user(author).await?)
    }
}
