//! Domain layer: entities and repository contracts.
//!
//! - [`entities`] - users and roles
//! - [`repositories`] - data-access traits implemented by the infrastructure layer
//!
//! Nothing in here depends on HTTP or on a specific store.

pub mod entities;
pub mod repositories;
