//! Registered JWT claims (RFC 7519 section 4.1) and the validation capability.

use crate::{
    error::{JwtError, JwtResult},
    validation::ValidationOptions,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Standard claims. Zero or empty fields are left out of the JSON and count
/// as absent.
///
/// Custom claims embed this with `#[serde(flatten)]` so both sets of fields
/// share one JSON object:
///
/// ```
/// use hmac_jwt::{Claims, Validate};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct SessionClaims {
///     #[serde(flatten)]
///     standard: Claims,
///     role: String,
/// }
///
/// impl Validate for SessionClaims {
///     fn standard_claims(&self) -> Option<&Claims> {
///         Some(&self.standard)
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Claims {
    /// Issuer.
    #[serde(rename = "iss", skip_serializing_if = "String::is_empty")]
    pub issuer: String,
    /// Subject.
    #[serde(rename = "sub", skip_serializing_if = "String::is_empty")]
    pub subject: String,
    /// Audience.
    #[serde(rename = "aud", skip_serializing_if = "String::is_empty")]
    pub audience: String,
    /// Expiry (unix seconds).
    #[serde(rename = "exp", skip_serializing_if = "is_unset")]
    pub expires_at: i64,
    /// Not before (unix seconds).
    #[serde(rename = "nbf", skip_serializing_if = "is_unset")]
    pub not_before: i64,
    /// Issued-at (unix seconds).
    #[serde(rename = "iat", skip_serializing_if = "is_unset")]
    pub issued_at: i64,
    /// JWT ID.
    #[serde(rename = "jti", skip_serializing_if = "String::is_empty")]
    pub id: String,
}

fn is_unset(timestamp: &i64) -> bool {
    *timestamp == 0
}

impl Claims {
    /// Empty claims.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the issuer (iss) claim.
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Set the subject (sub) claim.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Set the audience (aud) claim.
    #[must_use]
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// Set the JWT ID (jti) claim.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the expiration time relative to now.
    #[must_use]
    pub fn expires_in(mut self, dur: Duration) -> Self {
        self.expires_at = (Utc::now() + dur).timestamp();
        self
    }

    /// Set the expiration time (unix seconds).
    #[must_use]
    pub fn expires_at(mut self, timestamp: i64) -> Self {
        self.expires_at = timestamp;
        self
    }

    /// Set the not-before time (unix seconds).
    #[must_use]
    pub fn not_before(mut self, timestamp: i64) -> Self {
        self.not_before = timestamp;
        self
    }

    /// Set the issued-at time to now.
    #[must_use]
    pub fn issued_now(mut self) -> Self {
        self.issued_at = Utc::now().timestamp();
        self
    }

    /// Check the time-based claims against the current clock.
    pub fn validate(&self) -> JwtResult<()> {
        self.validate_at(Utc::now().timestamp(), &ValidationOptions::default())
    }

    /// Check the time-based claims against `now` (unix seconds).
    ///
    /// Order is exp, nbf, iat; the first failure wins. Unset claims are
    /// skipped.
    pub fn validate_at(&self, now: i64, options: &ValidationOptions) -> JwtResult<()> {
        let leeway = options.leeway_secs();

        if options.validate_exp
            && self.expires_at != 0
            && now >= self.expires_at.saturating_add(leeway)
        {
            return Err(JwtError::TokenExpired);
        }

        if options.validate_nbf
            && self.not_before != 0
            && now.saturating_add(leeway) < self.not_before
        {
            return Err(JwtError::TokenNotYetValid);
        }

        if options.validate_iat
            && self.issued_at != 0
            && now.saturating_add(leeway) < self.issued_at
        {
            return Err(JwtError::TokenUsedBeforeIssued);
        }

        Ok(())
    }
}

/// Capability query for time-claim validation.
///
/// After a signature verifies, the decoded claims are asked for their
/// standard claims; when they have some, those are validated. The default
/// answer is "none", so a type opts out with an empty `impl Validate for T {}`.
pub trait Validate {
    /// The standard claims carried by this value, if any.
    fn standard_claims(&self) -> Option<&Claims> {
        None
    }
}

impl Validate for Claims {
    fn standard_claims(&self) -> Option<&Claims> {
        Some(self)
    }
}

impl<T: Validate> Validate for Option<T> {
    fn standard_claims(&self) -> Option<&Claims> {
        self.as_ref().and_then(Validate::standard_claims)
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn standard_claims(&self) -> Option<&Claims> {
        (**self).standard_claims()
    }
}

impl Validate for () {}

impl Validate for serde_json::Value {}

impl Validate for serde_json::Map<String, serde_json::Value> {}

impl<V, S> Validate for HashMap<String, V, S> {}

impl<V> Validate for BTreeMap<String, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    fn check(claims: &Claims) -> JwtResult<()> {
        claims.validate_at(NOW, &ValidationOptions::default())
    }

    #[test]
    fn zero_values_are_omitted() {
        assert_eq!(serde_json::to_value(Claims::new()).unwrap(), json!({}));
        let claims = Claims::new().with_subject("user-123").expires_at(NOW);
        assert_eq!(
            serde_json::to_value(&claims).unwrap(),
            json!({"sub": "user-123", "exp": NOW})
        );
    }

    #[test]
    fn registered_names_round_trip() {
        let claims = Claims {
            issuer: "test-issuer".into(),
            subject: "user-123".into(),
            audience: "test-audience".into(),
            expires_at: NOW + 3600,
            not_before: NOW - 60,
            issued_at: NOW - 60,
            id: "jwt-id-123".into(),
        };
        let value = serde_json::to_value(&claims).unwrap();
        for key in ["iss", "sub", "aud", "exp", "nbf", "iat", "jti"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(serde_json::from_value::<Claims>(value).unwrap(), claims);
    }

    #[test]
    fn expiry_boundaries() {
        assert_eq!(check(&Claims::new().expires_at(NOW + 3600)), Ok(()));
        assert_eq!(check(&Claims::new().expires_at(NOW + 1)), Ok(()));
        assert_eq!(
            check(&Claims::new().expires_at(NOW)),
            Err(JwtError::TokenExpired)
        );
        assert_eq!(
            check(&Claims::new().expires_at(NOW - 3600)),
            Err(JwtError::TokenExpired)
        );
    }

    #[test]
    fn not_before_boundaries() {
        assert_eq!(check(&Claims::new().not_before(NOW)), Ok(()));
        assert_eq!(check(&Claims::new().not_before(NOW - 3600)), Ok(()));
        assert_eq!(
            check(&Claims::new().not_before(NOW + 1)),
            Err(JwtError::TokenNotYetValid)
        );
    }

    #[test]
    fn issued_at_boundaries() {
        let at = |iat| Claims {
            issued_at: iat,
            ..Claims::default()
        };
        assert_eq!(check(&at(NOW)), Ok(()));
        assert_eq!(check(&at(NOW - 3600)), Ok(()));
        assert_eq!(check(&at(NOW + 1)), Err(JwtError::TokenUsedBeforeIssued));
    }

    #[test]
    fn zero_values_skip_validation() {
        assert_eq!(check(&Claims::new()), Ok(()));
    }

    #[test]
    fn expiry_is_checked_first() {
        let claims = Claims {
            expires_at: NOW,
            not_before: NOW + 10,
            issued_at: NOW + 10,
            ..Claims::default()
        };
        assert_eq!(check(&claims), Err(JwtError::TokenExpired));
    }

    #[test]
    fn leeway_widens_windows() {
        let options = ValidationOptions::default().with_leeway(Duration::seconds(30));
        let expired = Claims::new().expires_at(NOW - 10);
        assert_eq!(expired.validate_at(NOW, &options), Ok(()));
        assert_eq!(
            Claims::new().expires_at(NOW - 30).validate_at(NOW, &options),
            Err(JwtError::TokenExpired)
        );
        assert_eq!(
            Claims::new().not_before(NOW + 30).validate_at(NOW, &options),
            Ok(())
        );
        assert_eq!(
            Claims::new().not_before(NOW + 31).validate_at(NOW, &options),
            Err(JwtError::TokenNotYetValid)
        );
    }

    #[test]
    fn disabled_checks_are_skipped() {
        let options = ValidationOptions::default()
            .validate_expiration(false)
            .validate_not_before(false);
        let claims = Claims::new().expires_at(NOW - 1).not_before(NOW + 1);
        assert_eq!(claims.validate_at(NOW, &options), Ok(()));
    }

    #[test]
    fn current_clock_validation() {
        let claims = Claims::new()
            .with_subject("user-123")
            .expires_in(Duration::hours(1))
            .issued_now();
        assert_eq!(claims.validate(), Ok(()));
        assert_eq!(
            Claims::new().expires_in(Duration::hours(-1)).validate(),
            Err(JwtError::TokenExpired)
        );
    }

    #[test]
    fn capability_query() {
        let claims = Claims::new().with_subject("s");
        assert_eq!(claims.standard_claims(), Some(&claims));
        assert_eq!(Some(claims.clone()).standard_claims(), Some(&claims));
        assert_eq!(None::<Claims>.standard_claims(), None);
        assert_eq!(json!({"exp": 1}).standard_claims(), None);
        assert_eq!(HashMap::<String, i64>::new().standard_claims(), None);
    }
}
