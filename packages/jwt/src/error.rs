//! JWT error types

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Every way a `marshal` or `unmarshal` call can fail.
///
/// Variants are comparable so callers can branch on the exact kind, e.g. to
/// tell an expired token apart from a tampered one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Structurally malformed token: wrong segment count or an undecodable
    /// signature segment.
    #[error("jwt: invalid token")]
    InvalidToken,

    /// The recomputed signature does not match the one carried by the token.
    #[error("jwt: signature mismatch during verification")]
    SignatureMismatch,

    /// The `alg` header names no supported keyed-hash algorithm.
    #[error("jwt: unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The `typ` header is set to something other than `JWT`.
    #[error("jwt: unsupported type: {0}")]
    UnsupportedType(String),

    /// `exp` is at or before the current time.
    #[error("jwt: token is expired")]
    TokenExpired,

    /// `nbf` is after the current time.
    #[error("jwt: token is not valid yet")]
    TokenNotYetValid,

    /// `iat` is after the current time.
    #[error("jwt: token used before issued")]
    TokenUsedBeforeIssued,

    /// A header or payload segment is not valid unpadded base64url.
    #[error("jwt: encoding error: {0}")]
    Encoding(String),

    /// A header or payload could not be converted to or from JSON.
    #[error("jwt: serialization error: {0}")]
    Serialization(String),

    /// The keyed-hash primitive rejected the secret.
    #[error("jwt: invalid key: {0}")]
    InvalidKey(String),
}

impl From<base64::DecodeError> for JwtError {
    fn from(err: base64::DecodeError) -> Self {
        JwtError::Encoding(err.to_string())
    }
}

impl From<serde_json::Error> for JwtError {
    fn from(err: serde_json::Error) -> Self {
        JwtError::Serialization(err.to_string())
    }
}

impl JwtError {
    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }

    /// Create an unsupported type error
    #[inline]
    #[must_use]
    pub fn unsupported_type(typ: &str) -> Self {
        JwtError::UnsupportedType(typ.to_string())
    }

    /// Whether the error comes from one of the time-based claims.
    #[must_use]
    pub fn is_time_claim(&self) -> bool {
        matches!(
            self,
            JwtError::TokenExpired | JwtError::TokenNotYetValid | JwtError::TokenUsedBeforeIssued
        )
    }
}
