//! OTP record entity for phone-number authentication.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// A one-time passcode held by the OTP store
///
/// At most one live record exists per identity key; issuing a new code for
/// the same key replaces the previous record. A record is destroyed on
/// successful consumption, expiry sweep, or replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// The generated code
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a record expiring `ttl` after `issued_at`
    pub fn new(code: impl Into<String>, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            code: code.into(),
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    /// Checks if the record has expired at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Compares a candidate against the stored code in constant time
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }

    /// Time left until expiry, or zero if already expired
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
