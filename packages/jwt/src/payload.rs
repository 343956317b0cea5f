//! Payload segment: any serde-compatible claims value.

use crate::{base64url, error::JwtResult};
use serde::{Serialize, de::DeserializeOwned};

/// JSON-encode `claims`, then base64url-encode.
///
/// `None` and `()` become JSON `null` rather than an error.
pub fn encode<C: Serialize + ?Sized>(claims: &C) -> JwtResult<String> {
    let json = serde_json::to_vec(claims)?;
    Ok(base64url::encode(&json))
}

/// Decode a payload segment into the caller's claims type.
pub fn decode<C: DeserializeOwned>(segment: &str) -> JwtResult<C> {
    let json = base64url::decode(segment)?;
    Ok(serde_json::from_slice(&json)?)
}
