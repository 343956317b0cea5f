//! HMAC-based JWT algorithms (HS256, HS384, HS512)
//!
//! [`Algorithm`] is the one place algorithm names are defined. Each variant
//! maps to exactly one keyed-hash construction, see [`Algorithm::keyed_hash`].

use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use std::{fmt, str::FromStr};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Supported signing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC using SHA-256, 32-byte signatures.
    HS256,
    /// HMAC using SHA-384, 48-byte signatures.
    HS384,
    /// HMAC using SHA-512, 64-byte signatures.
    HS512,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

    /// Header `alg` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    /// Signature length in bytes.
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            Algorithm::HS256 => 32,
            Algorithm::HS384 => 48,
            Algorithm::HS512 => 64,
        }
    }

    /// Seed the keyed-hash primitive for this algorithm with `secret`.
    ///
    /// HMAC accepts keys of any length, including empty ones.
    pub fn keyed_hash(self, secret: &[u8]) -> JwtResult<KeyedHash> {
        let invalid_key = |e: hmac::digest::InvalidLength| JwtError::InvalidKey(e.to_string());
        Ok(match self {
            Algorithm::HS256 => {
                KeyedHash::Sha256(HmacSha256::new_from_slice(secret).map_err(invalid_key)?)
            }
            Algorithm::HS384 => {
                KeyedHash::Sha384(HmacSha384::new_from_slice(secret).map_err(invalid_key)?)
            }
            Algorithm::HS512 => {
                KeyedHash::Sha512(HmacSha512::new_from_slice(secret).map_err(invalid_key)?)
            }
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    /// Case-insensitive; anything else, the empty string included, is
    /// [`JwtError::UnsupportedAlgorithm`] carrying the original text.
    fn from_str(alg: &str) -> JwtResult<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(alg))
            .ok_or_else(|| JwtError::unsupported_algorithm(alg))
    }
}

/// A seeded HMAC instance accepting streamed input.
#[derive(Clone)]
pub enum KeyedHash {
    /// HMAC-SHA256
    Sha256(HmacSha256),
    /// HMAC-SHA384
    Sha384(HmacSha384),
    /// HMAC-SHA512
    Sha512(HmacSha512),
}

impl KeyedHash {
    /// Feed more input.
    pub fn update(&mut self, data: &[u8]) {
        match self {
            KeyedHash::Sha256(mac) => mac.update(data),
            KeyedHash::Sha384(mac) => mac.update(data),
            KeyedHash::Sha512(mac) => mac.update(data),
        }
    }

    /// The algorithm this instance was built for.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            KeyedHash::Sha256(_) => Algorithm::HS256,
            KeyedHash::Sha384(_) => Algorithm::HS384,
            KeyedHash::Sha512(_) => Algorithm::HS512,
        }
    }

    /// Digest length in bytes.
    #[must_use]
    pub fn output_size(&self) -> usize {
        self.algorithm().output_size()
    }

    /// Consume the instance and return the authentication tag.
    #[must_use]
    pub fn finalize(self) -> Vec<u8> {
        match self {
            KeyedHash::Sha256(mac) => mac.finalize().into_bytes().to_vec(),
            KeyedHash::Sha384(mac) => mac.finalize().into_bytes().to_vec(),
            KeyedHash::Sha512(mac) => mac.finalize().into_bytes().to_vec(),
        }
    }
}

impl fmt::Debug for KeyedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key material.
        f.debug_tuple("KeyedHash").field(&self.algorithm()).finish()
    }
}

/// Compare a computed tag with one supplied by the token.
///
/// Runs in time that depends only on `computed.len()`: neither the position
/// of the first differing byte nor the length of `provided` changes the
/// amount of work done.
#[must_use]
pub fn fixed_time_eq(computed: &[u8], provided: &[u8]) -> bool {
    let mut equal = (computed.len() as u64).ct_eq(&(provided.len() as u64));
    for (i, byte) in computed.iter().enumerate() {
        let other = provided.get(i).copied().unwrap_or(0);
        equal &= byte.ct_eq(&other);
    }
    equal.into()
}
