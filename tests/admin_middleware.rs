mod common;

use axum::{Extension, Router, middleware, routing::get};
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use users_api::api::middleware::admin::{self, JWT_NOT_PRESENT_ERR, SessionUser};
use users_api::domain::entities::UserRole;
use users_api::utils::jwt::Claims;
use users_api::utils::signed_cookie::CookieSigner;

/// Server with a single protected route that counts how often it runs.
fn make_server(calls: Arc<AtomicUsize>) -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .route(
            "/protected",
            get(move |Extension(SessionUser(claims)): Extension<SessionUser>| {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    axum::Json(claims)
                }
            }),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), admin::layer))
        .with_state(state);

    TestServer::new(app).unwrap()
}

fn expect_rejected(response: &axum_test::TestResponse) {
    response.assert_status_unauthorized();
    response.assert_json(&json!({ "error": JWT_NOT_PRESENT_ERR }));
}

#[tokio::test]
async fn test_admin_passes_through_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let server = make_server(calls.clone());

    let response = server
        .get("/protected")
        .add_cookie(common::admin_cookie())
        .await;

    response.assert_status_ok();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let claims = response.json::<Claims>();
    assert_eq!(claims.id, 1);
    assert_eq!(claims.role, UserRole::Admin);
}

#[tokio::test]
async fn test_missing_cookie() {
    let calls = Arc::new(AtomicUsize::new(0));
    let server = make_server(calls.clone());

    let response = server.get("/protected").await;

    expect_rejected(&response);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_standard_role_gets_same_message() {
    let calls = Arc::new(AtomicUsize::new(0));
    let server = make_server(calls.clone());

    let response = server
        .get("/protected")
        .add_cookie(cookie::Cookie::new(
            common::COOKIE_NAME,
            common::session_cookie(2, UserRole::Standard),
        ))
        .await;

    expect_rejected(&response);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_tampered_signature() {
    let server = make_server(Arc::new(AtomicUsize::new(0)));

    let mut value = common::session_cookie(1, UserRole::Admin);
    let last = value.pop().unwrap();
    value.push(if last == '0' { '1' } else { '0' });

    let response = server
        .get("/protected")
        .add_cookie(cookie::Cookie::new(common::COOKIE_NAME, value))
        .await;

    expect_rejected(&response);
}

#[tokio::test]
async fn test_unsigned_jwt() {
    let server = make_server(Arc::new(AtomicUsize::new(0)));

    let signed = common::session_cookie(1, UserRole::Admin);
    let raw_jwt = CookieSigner::new(common::COOKIE_SECRET)
        .unsign(&signed)
        .unwrap()
        .to_string();

    let response = server
        .get("/protected")
        .add_cookie(cookie::Cookie::new(common::COOKIE_NAME, raw_jwt))
        .await;

    expect_rejected(&response);
}

#[tokio::test]
async fn test_cookie_signed_with_other_secret() {
    let server = make_server(Arc::new(AtomicUsize::new(0)));

    let signed = common::session_cookie(1, UserRole::Admin);
    let jwt = CookieSigner::new(common::COOKIE_SECRET).unsign(&signed).unwrap();
    let forged = CookieSigner::new("some-other-secret").sign(jwt);

    let response = server
        .get("/protected")
        .add_cookie(cookie::Cookie::new(common::COOKIE_NAME, forged))
        .await;

    expect_rejected(&response);
}

#[tokio::test]
async fn test_garbage_jwt_in_valid_signature() {
    let server = make_server(Arc::new(AtomicUsize::new(0)));

    let value = CookieSigner::new(common::COOKIE_SECRET).sign("not-a-jwt");

    let response = server
        .get("/protected")
        .add_cookie(cookie::Cookie::new(common::COOKIE_NAME, value))
        .await;

    expect_rejected(&response);
}

#[tokio::test]
async fn test_expired_jwt() {
    let server = make_server(Arc::new(AtomicUsize::new(0)));

    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        id: 1,
        email: common::ADMIN_EMAIL.to_string(),
        name: "Sean Maxwell".to_string(),
        role: UserRole::Admin,
        iat: now - 7200,
        exp: now - 3600,
    };

    let response = server
        .get("/protected")
        .add_cookie(common::cookie_for_claims(&claims))
        .await;

    expect_rejected(&response);
}

#[tokio::test]
async fn test_cookie_under_other_name_is_ignored() {
    let server = make_server(Arc::new(AtomicUsize::new(0)));

    let response = server
        .get("/protected")
        .add_cookie(cookie::Cookie::new(
            "session",
            common::session_cookie(1, UserRole::Admin),
        ))
        .await;

    expect_rejected(&response);
}
