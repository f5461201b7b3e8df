use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::booking::models::BookingRequest;
use crate::domain::booking::models::BookingStatus;
use crate::domain::booking::models::BookingWithService;
use crate::domain::errors::RepositoryError;

/// Persistence operations for booking requests.
#[async_trait]
pub trait BookingRepository: Send + Sync + 'static {
    /// Persist a new booking request.
    async fn create(&self, booking: BookingRequest) -> Result<BookingRequest, RepositoryError>;

    /// Retrieve all booking requests joined with service names, newest first.
    async fn list_with_services(&self) -> Result<Vec<BookingWithService>, RepositoryError>;

    /// Set the status of a booking; `None` when the booking does not exist.
    async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<BookingRequest>, RepositoryError>;
}
