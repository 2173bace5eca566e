use std::sync::Arc;

use crate::application::services::AuthService;
use crate::config::CookieConfig;
use crate::domain::repositories::UserRepository;
use crate::utils::jwt::JwtCodec;
use crate::utils::signed_cookie::CookieSigner;

/// Shared state injected into every handler and middleware.
///
/// The user store is chosen once at startup and passed in; nothing here reads
/// environment variables.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
    pub cookie: Arc<CookieSettings>,
    pub bcrypt_cost: u32,
}

/// Cookie attributes used when setting and reading the session cookie.
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub name: String,
    pub path: String,
    pub secure: bool,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        jwt: JwtCodec,
        cookie: &CookieConfig,
        bcrypt_cost: u32,
    ) -> Self {
        let auth_service = Arc::new(AuthService::new(
            users.clone(),
            jwt,
            CookieSigner::new(&cookie.secret),
        ));

        Self {
            users,
            auth_service,
            cookie: Arc::new(CookieSettings {
                name: cookie.name.clone(),
                path: cookie.path.clone(),
                secure: cookie.secure,
            }),
            bcrypt_cost,
        }
    }
}
