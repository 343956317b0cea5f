//! Compact, HMAC-signed JSON Web Tokens.
//!
//! A token is `base64url(header).base64url(payload).base64url(signature)`
//! where the signature is HS256, HS384 or HS512 over the first two segments.
//!
//! ```
//! use hmac_jwt::{Algorithm, Claims, Header, JwtError, marshal, unmarshal};
//! use chrono::Duration;
//!
//! let claims = Claims::new().with_subject("user-456").expires_in(Duration::hours(1));
//! let token = marshal(&Header::new(Algorithm::HS256), &claims, b"secret-key")?;
//!
//! let decoded: Claims = unmarshal(&token, b"secret-key")?;
//! assert_eq!(decoded.subject, "user-456");
//!
//! let tampered = unmarshal::<Claims>(&token, b"other-key");
//! assert_eq!(tampered, Err(JwtError::SignatureMismatch));
//! # Ok::<(), JwtError>(())
//! ```

mod algorithm;
pub mod base64url;
mod claims;
pub mod compact;
mod error;
mod header;
pub mod payload;
mod token;
mod validation;

pub use algorithm::{Algorithm, KeyedHash, fixed_time_eq};
pub use claims::{Claims, Validate};
pub use error::*;
pub use header::{Header, JWT};
pub use token::{marshal, unmarshal, unmarshal_into, unmarshal_with};
pub use validation::ValidationOptions;
