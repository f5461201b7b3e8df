use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_error;
use crate::domain::errors::RepositoryError;
use crate::domain::gallery::models::GalleryImage;
use crate::domain::gallery::ports::GalleryRepository;

pub struct PostgresGalleryRepository {
    pool: PgPool,
}

impl PostgresGalleryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GalleryImageRow {
    id: Uuid,
    url: String,
    filename: String,
    created_at: DateTime<Utc>,
}

impl From<GalleryImageRow> for GalleryImage {
    fn from(row: GalleryImageRow) -> Self {
        GalleryImage {
            id: row.id,
            url: row.url,
            filename: row.filename,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl GalleryRepository for PostgresGalleryRepository {
    async fn list(&self) -> Result<Vec<GalleryImage>, RepositoryError> {
        let rows: Vec<GalleryImageRow> = sqlx::query_as(
            r#"
            SELECT id, url, filename, created_at
            FROM gallery_images
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(GalleryImage::from).collect())
    }

    async fn create(&self, image: GalleryImage) -> Result<GalleryImage, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO gallery_images (id, url, filename, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(image.id)
        .bind(&image.url)
        .bind(&image.filename)
        .bind(image.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(image)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
