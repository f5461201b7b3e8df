use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_error;
use crate::domain::booking::models::BookingRequest;
use crate::domain::booking::models::BookingStatus;
use crate::domain::booking::models::BookingWithService;
use crate::domain::booking::ports::BookingRepository;
use crate::domain::errors::RepositoryError;

pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    service_id: Uuid,
    name: String,
    phone: String,
    email: String,
    preferred_date: NaiveDate,
    preferred_time: String,
    notes: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for BookingRequest {
    type Error = RepositoryError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(BookingRequest {
            id: row.id,
            service_id: row.service_id,
            name: row.name,
            phone: row.phone,
            email: row.email,
            preferred_date: row.preferred_date,
            preferred_time: row.preferred_time,
            notes: row.notes,
            status: row
                .status
                .parse::<BookingStatus>()
                .map_err(|e| RepositoryError::Database(e.to_string()))?,
            created_at: row.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct BookingWithServiceRow {
    id: Uuid,
    service_id: Uuid,
    name: String,
    phone: String,
    email: String,
    preferred_date: NaiveDate,
    preferred_time: String,
    notes: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    service_name: Option<String>,
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn create(&self, booking: BookingRequest) -> Result<BookingRequest, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO booking_requests (id, service_id, name, phone, email,
                                          preferred_date, preferred_time, notes,
                                          status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(booking.id)
        .bind(booking.service_id)
        .bind(&booking.name)
        .bind(&booking.phone)
        .bind(&booking.email)
        .bind(booking.preferred_date)
        .bind(&booking.preferred_time)
        .bind(&booking.notes)
        .bind(booking.status.as_str())
        .bind(booking.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(booking)
    }

    async fn list_with_services(&self) -> Result<Vec<BookingWithService>, RepositoryError> {
        let rows: Vec<BookingWithServiceRow> = sqlx::query_as(
            r#"
            SELECT b.id, b.service_id, b.name, b.phone, b.email,
                   b.preferred_date, b.preferred_time, b.notes, b.status,
                   b.created_at, s.name AS service_name
            FROM booking_requests b
            LEFT JOIN services s ON s.id = b.service_id
            ORDER BY b.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter()
            .map(|row| {
                let service_name = row.service_name.clone();
                let booking = BookingRequest::try_from(BookingRow {
                    id: row.id,
                    service_id: row.service_id,
                    name: row.name,
                    phone: row.phone,
                    email: row.email,
                    preferred_date: row.preferred_date,
                    preferred_time: row.preferred_time,
                    notes: row.notes,
                    status: row.status,
                    created_at: row.created_at,
                })?;
                Ok(BookingWithService {
                    booking,
                    service_name,
                })
            })
            .collect()
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<BookingRequest>, RepositoryError> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
            UPDATE booking_requests
            SET status = $2
            WHERE id = $1
            RETURNING id, service_id, name, phone, email, preferred_date,
                      preferred_time, notes, status, created_at
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(BookingRequest::try_from).transpose()
    }
}
