//! User entity and role enumeration.

use serde::{Deserialize, Serialize};

/// Access level carried by a user and by the session claims.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Standard,
    Admin,
}

impl UserRole {
    /// Numeric code used by the persistent store.
    pub fn as_i16(self) -> i16 {
        match self {
            UserRole::Standard => 0,
            UserRole::Admin => 1,
        }
    }
}

impl TryFrom<i16> for UserRole {
    type Error = i16;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UserRole::Standard),
            1 => Ok(UserRole::Admin),
            other => Err(other),
        }
    }
}

/// A stored user.
///
/// `pwd_hash` is never serialized; responses only expose id, name, email and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(skip_serializing, default)]
    pub pwd_hash: Option<String>,
}

/// Input data for creating a user. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub pwd_hash: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: UserRole::Standard,
            pwd_hash: None,
        }
    }

    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            pwd_hash: self.pwd_hash,
        }
    }
}
