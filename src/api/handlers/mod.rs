//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod users;

pub use auth::{login_handler, logout_handler};
pub use health::health_handler;
pub use users::{add_user_handler, delete_user_handler, get_users_handler, update_user_handler};
