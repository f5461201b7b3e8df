use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::gallery::models::GalleryImage;

/// Persistence operations for gallery images.
#[async_trait]
pub trait GalleryRepository: Send + Sync + 'static {
    /// Retrieve all images, newest first.
    async fn list(&self) -> Result<Vec<GalleryImage>, RepositoryError>;

    /// Persist a new image record.
    async fn create(&self, image: GalleryImage) -> Result<GalleryImage, RepositoryError>;

    /// Remove an image record; `false` when it does not exist.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
