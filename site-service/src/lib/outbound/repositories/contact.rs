use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_error;
use crate::domain::contact::models::ContactInfo;
use crate::domain::contact::models::ContactMessage;
use crate::domain::contact::models::MessageStatus;
use crate::domain::contact::models::SocialLinks;
use crate::domain::contact::ports::ContactInfoRepository;
use crate::domain::contact::ports::ContactMessageRepository;
use crate::domain::errors::RepositoryError;

pub struct PostgresContactInfoRepository {
    pool: PgPool,
}

impl PostgresContactInfoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Single-row table; the CHECK (id = 1) constraint keeps it that way.
#[derive(sqlx::FromRow)]
struct ContactInfoRow {
    phone: String,
    email: String,
    address: String,
    instagram: String,
    facebook: String,
    whatsapp: String,
}

impl From<ContactInfoRow> for ContactInfo {
    fn from(row: ContactInfoRow) -> Self {
        ContactInfo {
            phone: row.phone,
            email: row.email,
            address: row.address,
            social_links: SocialLinks {
                instagram: row.instagram,
                facebook: row.facebook,
                whatsapp: row.whatsapp,
            },
        }
    }
}

#[async_trait]
impl ContactInfoRepository for PostgresContactInfoRepository {
    async fn get(&self) -> Result<Option<ContactInfo>, RepositoryError> {
        let row: Option<ContactInfoRow> = sqlx::query_as(
            r#"
            SELECT phone, email, address, instagram, facebook, whatsapp
            FROM contact_info
            WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ContactInfo::from))
    }

    async fn upsert(&self, info: ContactInfo) -> Result<ContactInfo, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO contact_info (id, phone, email, address, instagram, facebook, whatsapp)
            VALUES (1, $1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                address = EXCLUDED.address,
                instagram = EXCLUDED.instagram,
                facebook = EXCLUDED.facebook,
                whatsapp = EXCLUDED.whatsapp
            "#,
        )
        .bind(&info.phone)
        .bind(&info.email)
        .bind(&info.address)
        .bind(&info.social_links.instagram)
        .bind(&info.social_links.facebook)
        .bind(&info.social_links.whatsapp)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(info)
    }
}

pub struct PostgresContactMessageRepository {
    pool: PgPool,
}

impl PostgresContactMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ContactMessageRow {
    id: Uuid,
    name: String,
    email: String,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContactMessageRow> for ContactMessage {
    type Error = RepositoryError;

    fn try_from(row: ContactMessageRow) -> Result<Self, Self::Error> {
        Ok(ContactMessage {
            id: row.id,
            name: row.name,
            email: row.email,
            message: row.message,
            status: row
                .status
                .parse::<MessageStatus>()
                .map_err(|e| RepositoryError::Database(e.to_string()))?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ContactMessageRepository for PostgresContactMessageRepository {
    async fn create(&self, message: ContactMessage) -> Result<ContactMessage, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages (id, name, email, message, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(message.id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(message.status.as_str())
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(message)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        let rows: Vec<ContactMessageRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, message, status, created_at
            FROM contact_messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(ContactMessage::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactMessage>, RepositoryError> {
        let row: Option<ContactMessageRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, message, status, created_at
            FROM contact_messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(ContactMessage::try_from).transpose()
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: MessageStatus,
    ) -> Result<Option<ContactMessage>, RepositoryError> {
        let row: Option<ContactMessageRow> = sqlx::query_as(
            r#"
            UPDATE contact_messages
            SET status = $2
            WHERE id = $1
            RETURNING id, name, email, message, status, created_at
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(ContactMessage::try_from).transpose()
    }
}
