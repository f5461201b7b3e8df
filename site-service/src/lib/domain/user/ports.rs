use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Persistence operations for the user aggregate.
///
/// The store is the only place email uniqueness is enforced; `create` relies
/// on an atomic unique-key insert and surfaces violations as `Conflict`.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `Conflict` - Email is already registered
    /// * `Database` - Database operation failed
    async fn create(&self, user: User) -> Result<User, RepositoryError>;

    /// Retrieve a user by email address (exact, case-sensitive match).
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Retrieve a user by identifier.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
}
