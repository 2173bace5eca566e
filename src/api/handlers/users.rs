//! Handlers for the users CRUD endpoints.
//!
//! Every failure, whether bad input or a store error, is answered with
//! `400 {"error": <message>}`.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;
use validator::Validate;

use crate::api::dto::user::{UserPayload, UsersResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::params::{Kind, Param, ValidationError, validate};
use crate::utils::password::hash_password;

pub const USER_MISSING_ERR: &str = "User property was not present for adding user route.";
pub const USER_UPDATE_MISSING_ERR: &str =
    "User property was not present for updating user route.";
pub const PASSWORD_UPDATE_ERR: &str = "Password cannot be changed through the update route.";

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::validation(rejection.body_text()))
}

/// Pulls the `user` field out of the body and decodes it.
///
/// A missing or `null` field yields `missing_message`.
fn extract_user(body: &Value, missing_message: &str) -> Result<UserPayload, AppError> {
    let user = body
        .get("user")
        .filter(|user| !user.is_null())
        .ok_or_else(|| AppError::validation(missing_message))?;

    validate(&[Param::new(user, Kind::Object)])?;

    let payload: UserPayload = serde_json::from_value(user.clone())
        .map_err(|e| AppError::validation(e.to_string()))?;
    payload.validate()?;

    Ok(payload)
}

/// Lists every user.
///
/// # Endpoint
///
/// `GET /api/users/all`
pub async fn get_users_handler(
    State(state): State<AppState>,
) -> Result<Json<UsersResponse>, AppError> {
    let users = state.users.get_all().await?;
    Ok(Json(UsersResponse { users }))
}

/// Adds one user.
///
/// # Endpoint
///
/// `POST /api/users/add` with body `{"user": {"name", "email", "role"?, "password"?}}`
///
/// # Errors
///
/// Returns 400 with [`USER_MISSING_ERR`] when `user` is absent; the store is not
/// called in that case.
pub async fn add_user_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let body = json_body(body)?;
    let payload = extract_user(&body, USER_MISSING_ERR)?;

    let pwd_hash = payload
        .password
        .as_deref()
        .map(|password| hash_password(password, state.bcrypt_cost))
        .transpose()?;

    let user = state.users.add(payload.into_new_user(pwd_hash)).await?;
    tracing::info!(user_id = user.id, "user added");

    Ok(StatusCode::CREATED)
}

/// Updates one user.
///
/// # Endpoint
///
/// `PUT /api/users/update` with body `{"user": {"id", "name", "email", "role"?}}`
///
/// # Errors
///
/// Returns 400 with [`USER_UPDATE_MISSING_ERR`] when `user` is absent, 400 with
/// [`PASSWORD_UPDATE_ERR`] when a `password` is sent, and 400 with the store's message
/// when the id does not exist.
pub async fn update_user_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let body = json_body(body)?;
    let payload = extract_user(&body, USER_UPDATE_MISSING_ERR)?;
    let id = payload.id.ok_or(ValidationError::ParamInvalid)?;
    if payload.password.is_some() {
        return Err(AppError::validation(PASSWORD_UPDATE_ERR));
    }

    state.users.update(payload.into_user(id)).await?;
    tracing::info!(user_id = id, "user updated");

    Ok(StatusCode::OK)
}

/// Deletes one user.
///
/// # Endpoint
///
/// `DELETE /api/users/delete/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer or does not exist.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let raw = Value::String(id);
    validate(&[Param::number(&raw)])?;

    let id = raw
        .as_str()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .ok_or(ValidationError::ParamInvalid)?;

    state.users.delete(id).await?;
    tracing::info!(user_id = id, "user deleted");

    Ok(StatusCode::OK)
}
