use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::review::models::Comment;
use crate::domain::review::models::Rating;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewWithAuthor;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_review(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(body): Json<CreateReviewBody>,
) -> Result<ApiSuccess<ReviewData>, ApiError> {
    let rating = body
        .rating
        .ok_or_else(|| ApiError::Validation("Field 'rating' is required".to_string()))?;
    let rating = Rating::new(rating).map_err(|e| ApiError::Validation(e.to_string()))?;

    let comment = body
        .comment
        .ok_or_else(|| ApiError::Validation("Field 'comment' is required".to_string()))?;
    let comment = Comment::new(comment).map_err(|e| ApiError::Validation(e.to_string()))?;

    state
        .review_service
        .submit(user.id, user.role, rating, comment)
        .await
        .map_err(ApiError::from)
        .map(|ref review| ApiSuccess::new(StatusCode::CREATED, review.into()))
}

pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ReviewWithAuthor>>, ApiError> {
    state
        .review_service
        .list()
        .await
        .map_err(ApiError::from)
        .map(|reviews| ApiSuccess::new(StatusCode::OK, reviews))
}

pub async fn my_review(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<ApiSuccess<ReviewData>, ApiError> {
    state
        .review_service
        .find_own(&user.id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("You have not submitted a review".to_string()))
        .map(|ref review| ApiSuccess::new(StatusCode::OK, review.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewBody {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewData {
    pub id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Review> for ReviewData {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            rating: review.rating.value(),
            comment: review.comment.as_str().to_string(),
            created_at: review.created_at,
        }
    }
}
