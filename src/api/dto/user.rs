//! DTOs for the users endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUser, User, UserRole};

/// The `user` object carried by add and update requests.
///
/// `id` is ignored on add and required on update. `role` defaults to standard.
/// `password` is hashed before it reaches the store on add, and rejected on update.
#[derive(Debug, Deserialize, Validate)]
pub struct UserPayload {
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    #[serde(default)]
    pub role: Option<UserRole>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,
}

impl UserPayload {
    pub fn into_new_user(self, pwd_hash: Option<String>) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
            role: self.role.unwrap_or_default(),
            pwd_hash,
        }
    }

    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role.unwrap_or_default(),
            pwd_hash: None,
        }
    }
}

/// Response for `GET /api/users/all`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_validation() {
        let ok: UserPayload =
            serde_json::from_value(json!({"name": "Gordan Freeman", "email": "gordan@example.com"}))
                .unwrap();
        assert!(ok.validate().is_ok());

        let bad_email: UserPayload =
            serde_json::from_value(json!({"name": "Gordan", "email": "not-an-email"})).unwrap();
        assert!(bad_email.validate().is_err());

        let short_password: UserPayload = serde_json::from_value(
            json!({"name": "Gordan", "email": "gordan@example.com", "password": "short"}),
        )
        .unwrap();
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_role_defaults_to_standard() {
        let payload: UserPayload =
            serde_json::from_value(json!({"name": "A", "email": "a@example.com"})).unwrap();

        assert_eq!(payload.into_user(4).role, UserRole::Standard);
    }
}
