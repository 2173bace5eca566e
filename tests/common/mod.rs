#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use users_api::config::CookieConfig;
use users_api::domain::entities::{NewUser, User, UserRole};
use users_api::infrastructure::persistence::MemoryUserRepository;
use users_api::routes::api_router;
use users_api::state::AppState;
use users_api::utils::jwt::{Claims, JwtCodec};
use users_api::utils::password::hash_password;
use users_api::utils::signed_cookie::CookieSigner;

pub const JWT_SECRET: &str = "test-jwt-secret";
pub const COOKIE_SECRET: &str = "test-cookie-secret";
pub const COOKIE_NAME: &str = "ExpressGeneratorTs";

pub const ADMIN_EMAIL: &str = "sean.maxwell@example.com";
pub const ADMIN_PASSWORD: &str = "Password@1";
pub const STANDARD_EMAIL: &str = "john.smith@example.com";
pub const STANDARD_PASSWORD: &str = "Password@2";

pub fn cookie_config() -> CookieConfig {
    CookieConfig {
        name: COOKIE_NAME.to_string(),
        path: "/".to_string(),
        secure: false,
        secret: COOKIE_SECRET.to_string(),
    }
}

pub fn jwt_codec() -> JwtCodec {
    JwtCodec::new(JWT_SECRET, 3600)
}

/// Memory store seeded with one admin (id 1) and one standard user (id 2).
pub fn seeded_repository() -> MemoryUserRepository {
    let admin = NewUser {
        name: "Sean Maxwell".to_string(),
        email: ADMIN_EMAIL.to_string(),
        role: UserRole::Admin,
        pwd_hash: Some(hash_password(ADMIN_PASSWORD, 4).unwrap()),
    };
    let standard = NewUser {
        name: "John Smith".to_string(),
        email: STANDARD_EMAIL.to_string(),
        role: UserRole::Standard,
        pwd_hash: Some(hash_password(STANDARD_PASSWORD, 4).unwrap()),
    };

    MemoryUserRepository::with_users([admin, standard])
}

pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(seeded_repository()),
        jwt_codec(),
        &cookie_config(),
        4,
    )
}

pub fn make_server() -> TestServer {
    TestServer::new(api_router(create_test_state())).unwrap()
}

/// Signed cookie value carrying a fresh JWT for `id`/`role`.
pub fn session_cookie(id: i64, role: UserRole) -> String {
    let user = User {
        id,
        name: "Session User".to_string(),
        email: format!("user{id}@example.com"),
        role,
        pwd_hash: None,
    };
    let codec = jwt_codec();
    let token = codec.encode(&codec.claims_for(&user)).unwrap();
    CookieSigner::new(COOKIE_SECRET).sign(&token)
}

pub fn admin_cookie() -> cookie::Cookie<'static> {
    cookie::Cookie::new(COOKIE_NAME, session_cookie(1, UserRole::Admin))
}

/// Signs arbitrary claims, e.g. already expired ones.
pub fn cookie_for_claims(claims: &Claims) -> cookie::Cookie<'static> {
    let token = jwt_codec().encode(claims).unwrap();
    cookie::Cookie::new(COOKIE_NAME, CookieSigner::new(COOKIE_SECRET).sign(&token))
}
