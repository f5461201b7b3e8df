use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::models::Service;
use crate::domain::catalog::models::ServiceUpdate;
use crate::domain::errors::RepositoryError;

/// Persistence operations for catalog entries.
#[async_trait]
pub trait ServiceRepository: Send + Sync + 'static {
    /// Retrieve active catalog entries.
    async fn list_active(&self) -> Result<Vec<Service>, RepositoryError>;

    /// Persist a new catalog entry.
    async fn create(&self, service: Service) -> Result<Service, RepositoryError>;

    /// Apply a partial update; `None` when the entry does not exist.
    async fn update(
        &self,
        id: Uuid,
        update: ServiceUpdate,
    ) -> Result<Option<Service>, RepositoryError>;

    /// Remove a catalog entry; `false` when the entry does not exist.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
