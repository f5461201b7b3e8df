use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::review::errors::ReviewContentError;
use crate::domain::user::models::UserId;

/// A customer review. The store enforces at most one per user.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: Uuid,
    pub user_id: UserId,
    pub rating: Rating,
    pub comment: Comment,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(user_id: UserId, rating: Rating, comment: Comment) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            rating,
            comment,
            created_at: Utc::now(),
        }
    }
}

/// Star rating, 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rating(i32);

impl Rating {
    pub fn new(value: i32) -> Result<Self, ReviewContentError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ReviewContentError::RatingOutOfRange(value))
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Review comment, 10 to 500 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment(String);

impl Comment {
    const MIN_LENGTH: usize = 10;
    const MAX_LENGTH: usize = 500;

    pub fn new(comment: String) -> Result<Self, ReviewContentError> {
        let comment = comment.trim().to_string();
        let length = comment.chars().count();
        if length < Self::MIN_LENGTH {
            Err(ReviewContentError::CommentTooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(ReviewContentError::CommentTooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(comment))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A review joined with its author's public details, for the public listing.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewWithAuthor {
    pub id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub author_name: String,
    pub author_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(1).is_ok());
        assert!(Rating::new(5).is_ok());
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
    }

    #[test]
    fn test_comment_length() {
        assert!(Comment::new("short".to_string()).is_err());
        assert!(Comment::new("long enough comment".to_string()).is_ok());
        assert!(Comment::new("x".repeat(501)).is_err());
    }

    #[test]
    fn test_comment_is_trimmed() {
        let comment = Comment::new("  long enough comment  ".to_string()).unwrap();
        assert_eq!(comment.as_str(), "long enough comment");
    }
}
