//! Admin-only gate based on the signed session cookie.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::domain::entities::UserRole;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt::Claims;

/// Returned for every rejection, including a valid session with a non-admin role.
pub const JWT_NOT_PRESENT_ERR: &str = "JWT not present in signed cookie.";

/// Claims of the authorized caller, stored in request extensions.
///
/// ```rust,ignore
/// async fn handler(Extension(SessionUser(claims)): Extension<SessionUser>) { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct SessionUser(pub Claims);

/// Lets only admin sessions through.
///
/// # Authorization Flow
///
/// 1. Read the session cookie (name from `COOKIE_NAME`)
/// 2. Verify the cookie signature and decode the JWT inside
/// 3. Require `role == admin`
/// 4. Insert [`SessionUser`] into request extensions and continue
///
/// # Errors
///
/// Returns `401 Unauthorized` with [`JWT_NOT_PRESENT_ERR`] if any step fails.
///
/// # Example
///
/// ```rust,ignore
/// let protected = user_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), admin::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let jar = CookieJar::from_headers(req.headers());

    let claims = match authorize(&st, &jar) {
        Ok(claims) => claims,
        Err(reason) => {
            tracing::debug!(reason, path = %req.uri().path(), "admin access rejected");
            metrics::counter!("auth_rejections_total", "reason" => reason).increment(1);
            return Err(AppError::unauthorized(JWT_NOT_PRESENT_ERR));
        }
    };

    tracing::debug!(user_id = claims.id, "admin access granted");
    req.extensions_mut().insert(SessionUser(claims));

    Ok(next.run(req).await)
}

fn authorize(st: &AppState, jar: &CookieJar) -> Result<Claims, &'static str> {
    let cookie = jar.get(&st.cookie.name).ok_or("session cookie missing")?;
    let claims = st.auth_service.read_session(cookie.value())?;

    if claims.role != UserRole::Admin {
        return Err("role is not admin");
    }

    Ok(claims)
}
