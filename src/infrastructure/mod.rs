//! Infrastructure layer: concrete implementations of the domain contracts.
//!
//! - [`persistence`] - in-memory and PostgreSQL user stores

pub mod persistence;
