//! Base64 URL-safe encoding without padding (RFC 7515 section 2)

use crate::error::JwtResult;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encode bytes as unpadded base64url text. Empty input yields empty text.
#[inline]
#[must_use]
pub fn encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode unpadded base64url text.
///
/// Padding characters, characters outside the URL-safe alphabet and
/// non-canonical trailing bits are all rejected with [`JwtError::Encoding`].
///
/// [`JwtError::Encoding`]: crate::JwtError::Encoding
#[inline]
pub fn decode(input: &str) -> JwtResult<Vec<u8>> {
    Ok(URL_SAFE_NO_PAD.decode(input)?)
}
