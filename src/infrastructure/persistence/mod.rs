//! User repository implementations.
//!
//! - [`MemoryUserRepository`] - in-process store, selected when `APP_ENV=development`
//! - [`PgUserRepository`] - PostgreSQL store, selected otherwise

pub mod memory_user_repository;
pub mod pg_user_repository;

pub use memory_user_repository::MemoryUserRepository;
pub use pg_user_repository::PgUserRepository;
