//! In-process user store used in development.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::{AppError, EMAIL_TAKEN, USER_NOT_FOUND};

struct Inner {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

/// User store kept in memory behind a [`RwLock`].
///
/// Ids start at 1 and are never reused. Data is lost on restart.
pub struct MemoryUserRepository {
    inner: RwLock<Inner>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        debug!("Using in-memory user store");
        Self {
            inner: RwLock::new(Inner {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a store pre-filled with `users`, assigning ids in order.
    pub fn with_users(users: impl IntoIterator<Item = NewUser>) -> Self {
        let mut inner = Inner {
            users: BTreeMap::new(),
            next_id: 1,
        };
        for user in users {
            let id = inner.next_id;
            inner.next_id += 1;
            inner.users.insert(id, user.into_user(id));
        }

        Self {
            inner: RwLock::new(inner),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn email_taken(users: &BTreeMap<i64, User>, email: &str, except: Option<i64>) -> bool {
    users
        .values()
        .any(|u| Some(u.id) != except && u.email.eq_ignore_ascii_case(email))
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn get_one(&self, email: &str) -> Result<Option<User>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().cloned().collect())
    }

    async fn add(&self, user: NewUser) -> Result<User, AppError> {
        let mut inner = self.inner.write().await;

        if email_taken(&inner.users, &user.email, None) {
            return Err(AppError::data_access(EMAIL_TAKEN));
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let user = user.into_user(id);
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;

        if !inner.users.contains_key(&user.id) {
            return Err(AppError::data_access(USER_NOT_FOUND));
        }
        if email_taken(&inner.users, &user.email, Some(user.id)) {
            return Err(AppError::data_access(EMAIL_TAKEN));
        }

        if let Some(stored) = inner.users.get_mut(&user.id) {
            stored.name = user.name;
            stored.email = user.email;
            stored.role = user.role;
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;

        inner
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::data_access(USER_NOT_FOUND))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
