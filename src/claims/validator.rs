use serde_json::{Map, Value};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::claims::numeric_date;
use crate::error::{Error, Result};
use crate::limits::MAX_CLOCK_SKEW_SECONDS;

/// Configuration for claim-time validation
///
/// Defaults: `exp` and `nbf` checked, no clock skew, wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimsValidation {
    validate_exp: bool,
    validate_nbf: bool,
    clock_skew_seconds: u64,
    fixed_now: Option<i64>,
}

impl Default for ClaimsValidation {
    fn default() -> Self {
        Self {
            validate_exp: true,
            validate_nbf: true,
            clock_skew_seconds: 0,
            fixed_now: None,
        }
    }
}

impl ClaimsValidation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clock skew tolerance (at most 300 seconds)
    pub fn clock_skew(mut self, seconds: u64) -> Self {
        self.clock_skew_seconds = seconds;
        self
    }

    /// Disable expiration validation
    pub fn no_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }

    /// Disable not-before validation
    pub fn no_nbf_validation(mut self) -> Self {
        self.validate_nbf = false;
        self
    }

    /// Skip all claim-time validation (use with extreme caution!)
    pub fn skip_all(self) -> Self {
        self.no_exp_validation().no_nbf_validation()
    }

    /// Evaluate claims as of `timestamp` instead of the system clock
    pub fn at(mut self, timestamp: i64) -> Self {
        self.fixed_now = Some(timestamp);
        self
    }

    fn now(&self) -> i64 {
        self.fixed_now.unwrap_or_else(current_timestamp)
    }
}

/// Get current Unix timestamp
fn current_timestamp() -> i64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    i64::try_from(secs).unwrap_or(i64::MAX)
}

/// Validate `exp` and `nbf` against a single sample of the current time
pub(crate) fn validate_claims(claims: &Map<String, Value>, config: &ClaimsValidation) -> Result<()> {
    if config.clock_skew_seconds > MAX_CLOCK_SKEW_SECONDS {
        return Err(Error::ClockSkewTooLarge {
            value: config.clock_skew_seconds,
            max: MAX_CLOCK_SKEW_SECONDS,
        });
    }

    let now = config.now();
    let skew = config.clock_skew_seconds as i64;

    if config.validate_exp {
        if let Some(exp) = claims.get("exp").and_then(numeric_date) {
            if now > exp.saturating_add(skew) {
                return Err(Error::ClaimExpired {
                    expired_at: exp,
                    now,
                    skew: config.clock_skew_seconds,
                });
            }
        }
    }

    if config.validate_nbf {
        if let Some(nbf) = claims.get("nbf").and_then(numeric_date) {
            if now < nbf.saturating_sub(skew) {
                return Err(Error::ClaimNotBefore {
                    not_before: nbf,
                    now,
                    skew: config.clock_skew_seconds,
                });
            }
        }
    }

    Ok(())
}
