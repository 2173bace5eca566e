//! # Users API
//!
//! A CRUD service skeleton for a `users` resource, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - `User` entity and the `UserRepository` contract
//! - **Application Layer** ([`application`]) - login and session handling
//! - **Infrastructure Layer** ([`infrastructure`]) - in-memory and PostgreSQL stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Users CRUD under `/api/users`, gated to admins
//! - Sessions as a JWT inside an HMAC-signed cookie
//! - Runtime parameter checks ([`utils::params`])
//! - Store chosen at startup (`APP_ENV`) and injected into the router state
//!
//! ## Quick Start
//!
//! ```bash
//! export JWT_SECRET="change-me"
//! export COOKIE_SECRET="change-me-too"
//! export ADMIN_EMAIL="admin@example.com"
//! export ADMIN_PASSWORD="Password@1"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::middleware::admin::SessionUser;
    pub use crate::application::services::AuthService;
    pub use crate::domain::entities::{NewUser, User, UserRole};
    pub use crate::domain::repositories::UserRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
