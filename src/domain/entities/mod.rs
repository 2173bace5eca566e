//! Core domain entities.
//!
//! - [`User`] - a stored user
//! - [`NewUser`] - input for creating a user
//! - [`UserRole`] - access level used by the admin middleware

pub mod user;

pub use user::{NewUser, User, UserRole};
