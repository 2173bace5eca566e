//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization and `validator` for field rules.

pub mod health;
pub mod user;
