//! Helpers shared by handlers, middleware and the admin CLI.
//!
//! - [`params`] - runtime type checks for raw request parameters
//! - [`jwt`] - session token encoding and decoding
//! - [`signed_cookie`] - HMAC signing of cookie values
//! - [`password`] - bcrypt hashing

pub mod jwt;
pub mod params;
pub mod password;
pub mod signed_cookie;
