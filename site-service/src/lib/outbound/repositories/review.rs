use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_error;
use crate::domain::errors::RepositoryError;
use crate::domain::review::models::Comment;
use crate::domain::review::models::Rating;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewWithAuthor;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::user::models::UserId;

pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    user_id: Uuid,
    rating: i32,
    comment: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReviewRow> for Review {
    type Error = RepositoryError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        Ok(Review {
            id: row.id,
            user_id: UserId(row.user_id),
            rating: Rating::new(row.rating)
                .map_err(|e| RepositoryError::Database(e.to_string()))?,
            comment: Comment::new(row.comment)
                .map_err(|e| RepositoryError::Database(e.to_string()))?,
            created_at: row.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ReviewWithAuthorRow {
    id: Uuid,
    rating: i32,
    comment: String,
    created_at: DateTime<Utc>,
    author_name: String,
    author_email: String,
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO reviews (id, user_id, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(review.id)
        .bind(review.user_id.0)
        .bind(review.rating.value())
        .bind(review.comment.as_str())
        .bind(review.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(review)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Review>, RepositoryError> {
        let row: Option<ReviewRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, rating, comment, created_at
            FROM reviews
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(Review::try_from).transpose()
    }

    async fn list_with_authors(&self) -> Result<Vec<ReviewWithAuthor>, RepositoryError> {
        let rows: Vec<ReviewWithAuthorRow> = sqlx::query_as(
            r#"
            SELECT r.id, r.rating, r.comment, r.created_at,
                   u.name AS author_name, u.email AS author_email
            FROM reviews r
            JOIN users u ON u.id = r.user_id
            ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|row| ReviewWithAuthor {
                id: row.id,
                rating: row.rating,
                comment: row.comment,
                created_at: row.created_at,
                author_name: row.author_name,
                author_email: row.author_email,
            })
            .collect())
    }
}
