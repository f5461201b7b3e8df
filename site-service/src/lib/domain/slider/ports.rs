use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::slider::models::Slider;
use crate::domain::slider::models::SliderUpdate;

/// Persistence operations for slider entries.
#[async_trait]
pub trait SliderRepository: Send + Sync + 'static {
    /// Retrieve all sliders ordered by position ascending.
    async fn list(&self) -> Result<Vec<Slider>, RepositoryError>;

    /// Persist a new slider.
    async fn create(&self, slider: Slider) -> Result<Slider, RepositoryError>;

    /// Apply a partial update; `None` when the slider does not exist.
    async fn update(
        &self,
        id: Uuid,
        update: SliderUpdate,
    ) -> Result<Option<Slider>, RepositoryError>;

    /// Remove a slider; `false` when the slider does not exist.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
