//! Session token claims for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for the JWT payload
///
/// Wire format: `{ "user_id": i64, "iat": unix_seconds, "exp": unix_seconds }`.
/// The token is self-contained; validity is determined purely by signature
/// and expiry, with no server-side token storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the authenticated user
    pub user_id: i64,

    /// Issued-at timestamp (unix seconds)
    pub iat: i64,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Creates claims issued at `now` and expiring `expiry` later
    pub fn new(user_id: i64, now: DateTime<Utc>, expiry: Duration) -> Self {
        Self {
            user_id,
            iat: now.timestamp(),
            exp: (now + expiry).timestamp(),
        }
    }

    /// Checks whether the claims have expired at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.exp, 0)
    }

    /// Issue instant as a timestamp
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.iat, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_carry_user_id_and_window() {
        let now = Utc::now();
        let claims = Claims::new(42, now, Duration::seconds(900));

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.exp - claims.iat, 900);
        assert!(!claims.is_expired(now));
        assert!(claims.is_expired(now + Duration::seconds(901)));
    }

    #[test]
    fn test_claims_wire_field_names() {
        let claims = Claims::new(7, Utc::now(), Duration::seconds(60));
        let json = serde_json::to_string(&claims).unwrap();

        assert!(json.contains("\"user_id\":7"));
        assert!(json.contains("\"iat\""));
        assert!(json.contains("\"exp\""));
    }

    #[test]
    fn test_claims_expose_instants_as_timestamps() {
        // Whole-second instant; unix-second claims cannot carry finer precision.
        let now = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let claims = Claims::new(42, now, Duration::seconds(900));

        assert_eq!(claims.issued_at(), Some(now));
        assert_eq!(claims.expires_at(), Some(now + Duration::seconds(900)));
    }
}
