//! HTTP server initialization and runtime setup.
//!
//! Builds the user store chosen by the configuration, wires the application state
//! and runs the Axum server until a shutdown signal arrives.

use crate::config::{AppEnv, Config};
use crate::domain::entities::{NewUser, UserRole};
use crate::domain::repositories::UserRepository;
use crate::infrastructure::persistence::{MemoryUserRepository, PgUserRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::jwt::JwtCodec;
use crate::utils::password::hash_password;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the user store for the configured environment.
///
/// - `development`: [`MemoryUserRepository`], seeded with the configured admin
/// - `production`: [`PgUserRepository`] after applying migrations
///
/// # Errors
///
/// Returns an error if the database is unreachable or migrations fail.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn UserRepository>> {
    match config.app_env {
        AppEnv::Development => {
            let repo = MemoryUserRepository::new();

            if let Some((email, password)) = &config.seed_admin {
                let pwd_hash = hash_password(password, config.bcrypt_cost)?;
                repo.add(NewUser {
                    name: "Admin".to_string(),
                    email: email.clone(),
                    role: UserRole::Admin,
                    pwd_hash: Some(pwd_hash),
                })
                .await
                .context("Failed to seed admin user")?;
                tracing::info!(%email, "Seeded admin user into memory store");
            }

            Ok(Arc::new(repo))
        }
        AppEnv::Production => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required in production")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            Ok(Arc::new(PgUserRepository::new(Arc::new(pool))))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The user store cannot be initialized
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let users = build_repository(&config).await?;

    let state = AppState::new(
        users,
        JwtCodec::new(&config.jwt_secret, config.jwt_expiration_seconds),
        &config.cookie,
        config.bcrypt_cost,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
