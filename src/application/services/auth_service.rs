//! Login and session-cookie handling.

use std::sync::Arc;

use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::jwt::{Claims, JwtCodec};
use crate::utils::password::verify_password;
use crate::utils::signed_cookie::CookieSigner;

/// Message returned for any failed login.
pub const LOGIN_FAILED: &str = "Login failed";

/// Issues and reads session credentials.
///
/// A session is a JWT (see [`JwtCodec`]) stored in an HMAC-signed cookie
/// (see [`CookieSigner`]).
pub struct AuthService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
    jwt: JwtCodec,
    signer: CookieSigner,
}

impl<R: UserRepository + ?Sized> AuthService<R> {
    pub fn new(repository: Arc<R>, jwt: JwtCodec, signer: CookieSigner) -> Self {
        Self {
            repository,
            jwt,
            signer,
        }
    }

    /// Session lifetime in seconds, also used as the cookie `Max-Age`.
    pub fn session_lifetime(&self) -> u64 {
        self.jwt.expiration_seconds()
    }

    /// Verifies the credentials and returns the signed cookie value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with [`LOGIN_FAILED`] for an unknown email, a
    /// user without a password, or a wrong password. Store failures are passed through.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .repository
            .get_one(email)
            .await?
            .ok_or_else(|| AppError::unauthorized(LOGIN_FAILED))?;

        let matches = user
            .pwd_hash
            .as_deref()
            .is_some_and(|hash| verify_password(password, hash));

        if !matches {
            metrics::counter!("login_failures_total").increment(1);
            return Err(AppError::unauthorized(LOGIN_FAILED));
        }

        let token = self.jwt.encode(&self.jwt.claims_for(&user)).map_err(|e| {
            tracing::error!(error = %e, "failed to encode session token");
            AppError::unauthorized(LOGIN_FAILED)
        })?;

        tracing::info!(user_id = user.id, "user logged in");
        Ok(self.signer.sign(&token))
    }

    /// Unsigns a cookie value and decodes the JWT inside it.
    ///
    /// Returns a short reason on failure; callers decide what to expose.
    pub fn read_session(&self, cookie_value: &str) -> Result<Claims, &'static str> {
        let token = self
            .signer
            .unsign(cookie_value)
            .ok_or("invalid cookie signature")?;

        self.jwt.decode(token).map_err(|_| "invalid session token")
    }
}
