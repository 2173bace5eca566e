//! Repository trait for user storage.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Data-access contract for users.
///
/// Handlers only see this trait; the concrete store is chosen at startup and shared
/// as `Arc<dyn UserRepository>`, so implementations must tolerate concurrent calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUserRepository`] - in-process store for development
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Errors
///
/// Every failure is an [`AppError::DataAccess`]; "not found" is not distinguished
/// from other failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by email.
    async fn get_one(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Returns every user ordered by id.
    async fn get_all(&self) -> Result<Vec<User>, AppError>;

    /// Stores a new user and returns it with its assigned id.
    ///
    /// Fails if the email is already taken.
    async fn add(&self, user: NewUser) -> Result<User, AppError>;

    /// Replaces name, email and role of the user with `user.id`.
    ///
    /// The password hash is left untouched. Fails with
    /// [`crate::error::USER_NOT_FOUND`] if the id does not exist.
    async fn update(&self, user: User) -> Result<(), AppError>;

    /// Removes a user. Fails with [`crate::error::USER_NOT_FOUND`] if the id does
    /// not exist.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Reports whether the backing store is reachable.
    async fn health_check(&self) -> bool;
}
