//! API route configuration.
//!
//! Paths are relative; [`crate::routes::app_router`] mounts them under `/api/users`
//! and `/api/auth`.

use crate::api::handlers::{
    add_user_handler, delete_user_handler, get_users_handler, login_handler, logout_handler,
    update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Users CRUD routes. Protected by [`crate::api::middleware::admin`] when mounted.
///
/// # Endpoints
///
/// - `GET    /all`         - List every user
/// - `POST   /add`         - Add a user
/// - `PUT    /update`      - Update a user
/// - `DELETE /delete/{id}` - Delete a user
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(get_users_handler))
        .route("/add", post(add_user_handler))
        .route("/update", put(update_user_handler))
        .route("/delete/{id}", delete(delete_user_handler))
}

/// Session routes, public.
///
/// # Endpoints
///
/// - `POST /login`  - Verify credentials and set the session cookie
/// - `GET  /logout` - Clear the session cookie
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_handler))
        .route("/logout", get(logout_handler))
}
