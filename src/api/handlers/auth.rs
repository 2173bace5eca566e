//! Handlers for login and logout.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::params::{Param, validate};

/// Verifies credentials and sets the signed session cookie.
///
/// # Endpoint
///
/// `POST /api/auth/login` with body `{"email": "...", "password": "..."}`
///
/// # Errors
///
/// Returns 400 if either field is missing or not a string.
/// Returns 401 `Login failed` for unknown users and wrong passwords.
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(CookieJar, StatusCode), AppError> {
    let Json(body) = body.map_err(|rejection| AppError::validation(rejection.body_text()))?;

    let email = body.get("email").unwrap_or(&Value::Null);
    let password = body.get("password").unwrap_or(&Value::Null);
    validate(&[Param::string(email), Param::string(password)])?;

    let value = state
        .auth_service
        .login(
            email.as_str().unwrap_or_default(),
            password.as_str().unwrap_or_default(),
        )
        .await?;

    let max_age = i64::try_from(state.auth_service.session_lifetime()).unwrap_or(i64::MAX);
    let cookie = Cookie::build((state.cookie.name.clone(), value))
        .path(state.cookie.path.clone())
        .http_only(true)
        .secure(state.cookie.secure)
        .same_site(SameSite::Strict)
        .max_age(cookie::time::Duration::seconds(max_age));

    Ok((jar.add(cookie), StatusCode::OK))
}

/// Clears the session cookie.
///
/// # Endpoint
///
/// `GET /api/auth/logout`
pub async fn logout_handler(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    let removal = Cookie::build((state.cookie.name.clone(), "")).path(state.cookie.path.clone());
    (jar.remove(removal), StatusCode::OK)
}
