//! HTTP middleware for request processing and protection.

pub mod admin;
pub mod tracing;
