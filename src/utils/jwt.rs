//! JWT encoding and decoding for session claims.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{User, UserRole};

/// Payload carried by the session JWT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub iat: usize,
    pub exp: usize,
}

/// Signs and verifies session tokens with a shared HS256 secret.
#[derive(Clone)]
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiration_seconds: u64,
}

impl JwtCodec {
    pub fn new(secret: &str, expiration_seconds: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiration_seconds,
        }
    }

    pub fn expiration_seconds(&self) -> u64 {
        self.expiration_seconds
    }

    /// Builds claims for `user` valid from now until now + expiration.
    ///
    /// `exp` saturates instead of wrapping for oversized lifetimes.
    pub fn claims_for(&self, user: &User) -> Claims {
        let now = Utc::now().timestamp() as usize;
        let lifetime = usize::try_from(self.expiration_seconds).unwrap_or(usize::MAX);

        Claims {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            iat: now,
            exp: now.saturating_add(lifetime),
        }
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::default(), claims, &self.encoding)
    }

    /// Verifies signature and expiry, then decodes the payload.
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &Validation::default()).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            id: 7,
            name: "Sean Maxwell".to_string(),
            email: "sean.maxwell@example.com".to_string(),
            role: UserRole::Admin,
            pwd_hash: None,
        }
    }

    #[test]
    fn test_encode_then_decode() {
        let codec = JwtCodec::new("secret", 3600);
        let claims = codec.claims_for(&admin());

        let token = codec.encode(&claims).unwrap();
        let decoded = codec.decode(&token).unwrap();

        assert_eq!(decoded, claims);
        assert_eq!(decoded.role, UserRole::Admin);
        assert_eq!(decoded.exp - decoded.iat, 3600);
    }

    #[test]
    fn test_decode_rejects_other_secret() {
        let codec = JwtCodec::new("secret-a", 3600);
        let other = JwtCodec::new("secret-b", 3600);

        let token = codec.encode(&codec.claims_for(&admin())).unwrap();

        assert!(other.decode(&token).is_err());
    }

    #[test]
    fn test_decode_rejects_expired_token() {
        let codec = JwtCodec::new("secret", 3600);
        let mut claims = codec.claims_for(&admin());
        claims.iat -= 10_000;
        claims.exp = claims.iat + 60;

        let token = codec.encode(&claims).unwrap();

        assert!(codec.decode(&token).is_err());
    }

    #[test]
    fn test_oversized_lifetime_saturates() {
        let codec = JwtCodec::new("secret", u64::MAX);
        let claims = codec.claims_for(&admin());

        assert_eq!(claims.exp, usize::MAX);
        assert!(claims.exp > claims.iat);

        let token = codec.encode(&claims).unwrap();
        assert_eq!(codec.decode(&token).unwrap(), claims);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let codec = JwtCodec::new("secret", 3600);
        assert!(codec.decode("not-a-jwt").is_err());
    }
}
