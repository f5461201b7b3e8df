use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::contact::models::ContactInfo;
use crate::domain::contact::models::ContactMessage;
use crate::domain::contact::models::MessageStatus;
use crate::domain::errors::RepositoryError;

/// Persistence for the singleton contact-info record.
#[async_trait]
pub trait ContactInfoRepository: Send + Sync + 'static {
    /// Retrieve the contact details, if they have been set.
    async fn get(&self) -> Result<Option<ContactInfo>, RepositoryError>;

    /// Replace (or create) the contact details.
    async fn upsert(&self, info: ContactInfo) -> Result<ContactInfo, RepositoryError>;
}

/// Persistence operations for contact-form messages.
#[async_trait]
pub trait ContactMessageRepository: Send + Sync + 'static {
    /// Persist a new message.
    async fn create(&self, message: ContactMessage) -> Result<ContactMessage, RepositoryError>;

    /// Retrieve all messages, newest first.
    async fn list(&self) -> Result<Vec<ContactMessage>, RepositoryError>;

    /// Retrieve a single message.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactMessage>, RepositoryError>;

    /// Set the status of a message; `None` when it does not exist.
    async fn update_status(
        &self,
        id: Uuid,
        status: MessageStatus,
    ) -> Result<Option<ContactMessage>, RepositoryError>;
}
