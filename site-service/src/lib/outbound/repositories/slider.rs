use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_error;
use crate::domain::errors::RepositoryError;
use crate::domain::slider::models::Slider;
use crate::domain::slider::models::SliderUpdate;
use crate::domain::slider::ports::SliderRepository;

pub struct PostgresSliderRepository {
    pool: PgPool,
}

impl PostgresSliderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SliderRow {
    id: Uuid,
    title: String,
    description: String,
    image_url: String,
    position: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<SliderRow> for Slider {
    fn from(row: SliderRow) -> Self {
        Slider {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            position: row.position,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl SliderRepository for PostgresSliderRepository {
    async fn list(&self) -> Result<Vec<Slider>, RepositoryError> {
        let rows: Vec<SliderRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, image_url, position, is_active, created_at
            FROM sliders
            ORDER BY position ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Slider::from).collect())
    }

    async fn create(&self, slider: Slider) -> Result<Slider, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO sliders (id, title, description, image_url, position,
                                 is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(slider.id)
        .bind(&slider.title)
        .bind(&slider.description)
        .bind(&slider.image_url)
        .bind(slider.position)
        .bind(slider.is_active)
        .bind(slider.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(slider)
    }

    async fn update(
        &self,
        id: Uuid,
        update: SliderUpdate,
    ) -> Result<Option<Slider>, RepositoryError> {
        let row: Option<SliderRow> = sqlx::query_as(
            r#"
            UPDATE sliders
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                position = COALESCE($5, position),
                is_active = COALESCE($6, is_active)
            WHERE id = $1
            RETURNING id, title, description, image_url, position, is_active, created_at
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.description)
        .bind(update.image_url)
        .bind(update.position)
        .bind(update.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Slider::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM sliders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
