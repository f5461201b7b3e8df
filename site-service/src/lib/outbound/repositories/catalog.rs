use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_error;
use crate::domain::catalog::models::Service;
use crate::domain::catalog::models::ServiceUpdate;
use crate::domain::catalog::models::Unit;
use crate::domain::catalog::ports::ServiceRepository;
use crate::domain::errors::RepositoryError;

pub struct PostgresServiceRepository {
    pool: PgPool,
}

impl PostgresServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ServiceRow {
    id: Uuid,
    name: String,
    description: String,
    price: f64,
    unit: String,
    image_url: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ServiceRow> for Service {
    type Error = RepositoryError;

    fn try_from(row: ServiceRow) -> Result<Self, Self::Error> {
        Ok(Service {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            unit: row
                .unit
                .parse::<Unit>()
                .map_err(|e| RepositoryError::Database(e.to_string()))?,
            image_url: row.image_url,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ServiceRepository for PostgresServiceRepository {
    async fn list_active(&self) -> Result<Vec<Service>, RepositoryError> {
        let rows: Vec<ServiceRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, unit, image_url, is_active,
                   created_at, updated_at
            FROM services
            WHERE is_active = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(Service::try_from).collect()
    }

    async fn create(&self, service: Service) -> Result<Service, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO services (id, name, description, price, unit, image_url,
                                  is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(service.id)
        .bind(&service.name)
        .bind(&service.description)
        .bind(service.price)
        .bind(service.unit.as_str())
        .bind(&service.image_url)
        .bind(service.is_active)
        .bind(service.created_at)
        .bind(service.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(service)
    }

    async fn update(
        &self,
        id: Uuid,
        update: ServiceUpdate,
    ) -> Result<Option<Service>, RepositoryError> {
        let row: Option<ServiceRow> = sqlx::query_as(
            r#"
            UPDATE services
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                unit = COALESCE($5, unit),
                image_url = COALESCE($6, image_url),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, price, unit, image_url, is_active,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.description)
        .bind(update.price)
        .bind(update.unit.map(|u| u.as_str().to_string()))
        .bind(update.image_url)
        .bind(update.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(Service::try_from).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
