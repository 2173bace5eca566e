//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`       - Health check (public)
//! - `/api/auth/*`        - Login and logout (public)
//! - `/api/users/*`       - Users CRUD (admin session cookie required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Admin gate** - Signed cookie + JWT role check on `/api/users`
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::{admin, tracing};
use crate::api::routes::{auth_routes, user_routes};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}

/// All routes and middleware, without path normalization.
pub fn api_router(state: AppState) -> Router {
    let users = user_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        admin::layer,
    ));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/users", users)
        .nest("/api/auth", auth_routes())
        .with_state(state)
        .layer(tracing::layer())
}
