//! Password hashing with bcrypt.

use crate::error::AppError;

pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    bcrypt::hash(password, cost).map_err(|e| {
        tracing::error!(error = %e, "failed to hash password");
        AppError::data_access("Could not hash password")
    })
}

/// Returns `false` for a mismatch and for malformed hashes.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
