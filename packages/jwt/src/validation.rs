//! JWT validation options and configuration.

use chrono::Duration;

/// Options for checking the time-based claims.
///
/// The default has zero leeway and checks every claim, which gives the exact
/// boundaries: `exp == now` is expired, `nbf == now` and `iat == now` are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Leeway for time-based claims.
    pub leeway: Duration,
    /// Validate expiry.
    pub validate_exp: bool,
    /// Validate not-before.
    pub validate_nbf: bool,
    /// Validate issued-at.
    pub validate_iat: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            leeway: Duration::zero(),
            validate_exp: true,
            validate_nbf: true,
            validate_iat: true,
        }
    }
}

impl ValidationOptions {
    /// Set the time leeway for validation. Negative values count as zero.
    #[must_use]
    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway.max(Duration::zero());
        self
    }

    /// Set whether to validate expiration.
    #[must_use]
    pub fn validate_expiration(mut self, validate: bool) -> Self {
        self.validate_exp = validate;
        self
    }

    /// Set whether to validate not-before.
    #[must_use]
    pub fn validate_not_before(mut self, validate: bool) -> Self {
        self.validate_nbf = validate;
        self
    }

    /// Set whether to validate issued-at.
    #[must_use]
    pub fn validate_issued_at(mut self, validate: bool) -> Self {
        self.validate_iat = validate;
        self
    }

    /// Leeway in whole seconds.
    pub(crate) fn leeway_secs(&self) -> i64 {
        self.leeway.num_seconds()
    }
}
