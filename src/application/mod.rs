//! Application layer services.
//!
//! - [`services::auth_service::AuthService`] - login, session cookie issuing and reading
//!
//! User CRUD has no business rules of its own; handlers call the
//! [`crate::domain::repositories::UserRepository`] directly.

pub mod services;
