//! JOSE header: `{"alg": ..., "typ": ...}`

use crate::{
    algorithm::{Algorithm, KeyedHash},
    base64url,
    error::{JwtError, JwtResult},
};
use serde::{Deserialize, Serialize};

/// The token type marker accepted in the `typ` header.
pub const JWT: &str = "JWT";

/// JWT header.
///
/// `alg` is kept as text because a decoded header is untrusted input; it is
/// resolved through [`Algorithm`] every time a signer is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Signing algorithm name.
    #[serde(default)]
    pub alg: String,
    /// Token type, `JWT` or empty.
    #[serde(default)]
    pub typ: String,
}

impl Header {
    /// Header for `alg` with `typ` set to `JWT`.
    #[must_use]
    pub fn new(alg: Algorithm) -> Self {
        Self {
            alg: alg.as_str().to_string(),
            typ: JWT.to_string(),
        }
    }

    /// Override the token type.
    #[must_use]
    pub fn with_type(mut self, typ: impl Into<String>) -> Self {
        self.typ = typ.into();
        self
    }

    /// Resolve the `alg` field.
    pub fn algorithm(&self) -> JwtResult<Algorithm> {
        self.alg.parse()
    }

    /// Keyed-hash primitive for this header's algorithm, seeded with `secret`.
    pub fn signer(&self, secret: &[u8]) -> JwtResult<KeyedHash> {
        self.algorithm()?.keyed_hash(secret)
    }

    /// An empty `typ` counts as `JWT`; anything else must match it exactly.
    pub fn check_type(&self) -> JwtResult<()> {
        if self.typ.is_empty() || self.typ == JWT {
            Ok(())
        } else {
            Err(JwtError::unsupported_type(&self.typ))
        }
    }

    /// JSON-encode, then base64url-encode.
    pub fn encode(&self) -> JwtResult<String> {
        let json = serde_json::to_vec(self)?;
        Ok(base64url::encode(&json))
    }

    /// Reverse of [`Header::encode`].
    pub fn decode(segment: &str) -> JwtResult<Self> {
        let json = base64url::decode(segment)?;
        Ok(serde_json::from_slice(&json)?)
    }
}

impl From<Algorithm> for Header {
    fn from(alg: Algorithm) -> Self {
        Self::new(alg)
    }
}
