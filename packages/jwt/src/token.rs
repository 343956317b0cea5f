//! Token signing and verification.
//!
//! Verification runs in a fixed order: split, decode the signature, decode the
//! header, resolve the algorithm from that header, recompute and compare the
//! signature in constant time, and only then touch the payload. Nothing about
//! the payload is looked at before the signature has matched.

use crate::{
    algorithm::{KeyedHash, fixed_time_eq},
    base64url,
    claims::Validate,
    compact::{self, Segments},
    error::{JwtError, JwtResult},
    header::Header,
    payload,
    validation::ValidationOptions,
};
use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

/// Sign `claims` under `header` and return the compact token.
///
/// An unsupported `alg` fails before anything is encoded.
pub fn marshal<C: Serialize + ?Sized>(
    header: &Header,
    claims: &C,
    secret: &[u8],
) -> JwtResult<String> {
    let signer = header.signer(secret)?;
    let header_segment = header.encode()?;
    let payload_segment = payload::encode(claims)?;

    let algorithm = signer.algorithm();
    let signature = sign(signer, &header_segment, &payload_segment);
    let signature_segment = base64url::encode(&signature);

    tracing::trace!(
        alg = %algorithm,
        header_len = header_segment.len(),
        payload_len = payload_segment.len(),
        "signed token"
    );

    Ok(Segments::new(&header_segment, &payload_segment, &signature_segment).join())
}

/// Verify `token` and decode its claims, checking time claims against the
/// current clock with default [`ValidationOptions`].
pub fn unmarshal<C: DeserializeOwned + Validate>(token: &str, secret: &[u8]) -> JwtResult<C> {
    unmarshal_with(token, secret, &ValidationOptions::default())
}

/// Like [`unmarshal`], writing the claims into `target`.
///
/// `target` is left untouched when verification fails.
pub fn unmarshal_into<C: DeserializeOwned + Validate>(
    token: &str,
    target: &mut C,
    secret: &[u8],
) -> JwtResult<()> {
    *target = unmarshal(token, secret)?;
    Ok(())
}

/// Verify `token` and decode its claims under explicit validation options.
pub fn unmarshal_with<C: DeserializeOwned + Validate>(
    token: &str,
    secret: &[u8],
    options: &ValidationOptions,
) -> JwtResult<C> {
    let segments = Segments::split(token)?;

    // Decode details of the signature segment are not reported.
    let expected = base64url::decode(segments.signature).map_err(|_| JwtError::InvalidToken)?;

    let header = Header::decode(segments.header)?;
    // Re-resolved from the untrusted header on every call.
    let signer = header.signer(secret)?;
    let algorithm = signer.algorithm();
    let computed = sign(signer, segments.header, segments.payload);

    if !fixed_time_eq(&computed, &expected) {
        return Err(JwtError::SignatureMismatch);
    }

    let claims: C = payload::decode(segments.payload)?;
    if let Some(standard) = claims.standard_claims() {
        standard.validate_at(Utc::now().timestamp(), options)?;
    }
    header.check_type()?;

    tracing::trace!(alg = %algorithm, "verified token");

    Ok(claims)
}

fn sign(mut signer: KeyedHash, header_segment: &str, payload_segment: &str) -> Vec<u8> {
    signer.update(compact::signing_input(header_segment, payload_segment).as_bytes());
    signer.finalize()
}
