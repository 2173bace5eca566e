//! HMAC-signed cookie values.
//!
//! A signed value has the form `s:<value>.<mac>` where `<mac>` is the lowercase hex
//! HMAC-SHA256 of `<value>` keyed by the cookie secret. Values may contain dots (JWTs
//! do), so the MAC is split off at the last dot.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const PREFIX: &str = "s:";

/// Signs and verifies cookie values with a server-side secret.
#[derive(Clone)]
pub struct CookieSigner {
    secret: Vec<u8>,
}

impl CookieSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key length")
    }

    pub fn sign(&self, value: &str) -> String {
        let mut mac = self.mac();
        mac.update(value.as_bytes());
        format!(
            "{PREFIX}{value}.{}",
            hex::encode(mac.finalize().into_bytes())
        )
    }

    /// Returns the original value if `signed` carries a valid signature.
    pub fn unsign<'a>(&self, signed: &'a str) -> Option<&'a str> {
        let rest = signed.strip_prefix(PREFIX)?;
        let (value, signature) = rest.rsplit_once('.')?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac();
        mac.update(value.as_bytes());
        mac.verify_slice(&signature).ok()?;

        Some(value)
    }
}
