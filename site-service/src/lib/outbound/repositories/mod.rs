pub mod booking;
pub mod catalog;
pub mod contact;
pub mod gallery;
pub mod review;
pub mod slider;
pub mod user;

pub use booking::PostgresBookingRepository;
pub use catalog::PostgresServiceRepository;
pub use contact::PostgresContactInfoRepository;
pub use contact::PostgresContactMessageRepository;
pub use gallery::PostgresGalleryRepository;
pub use review::PostgresReviewRepository;
pub use slider::PostgresSliderRepository;
pub use user::PostgresUserRepository;

use crate::domain::errors::RepositoryError;

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return RepositoryError::Conflict(db_err.to_string());
        }
    }
    RepositoryError::Database(e.to_string())
}
