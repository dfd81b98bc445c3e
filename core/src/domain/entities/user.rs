//! User entity representing a registered identity in the PhoneAuth system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Id placeholder for users that have not been persisted yet
pub const UNASSIGNED_USER_ID: i64 = 0;

/// User entity representing a registered identity
///
/// Owned by the external user store; this core treats it as an opaque
/// record obtained via lookup-or-create. The phone number is unique and
/// already normalized by the outer layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,

    /// Canonical phone number (the identity key)
    pub phone_number: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a user record pending persistence
    ///
    /// The id stays [`UNASSIGNED_USER_ID`] until the store assigns one;
    /// repositories return the persisted record with authoritative fields.
    ///
    /// # Arguments
    ///
    /// * `phone_number` - Canonical phone number
    /// * `now` - Creation instant (from the injected clock)
    pub fn new(phone_number: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: UNASSIGNED_USER_ID,
            phone_number: phone_number.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the store has assigned an id yet
    pub fn is_persisted(&self) -> bool {
        self.id != UNASSIGNED_USER_ID
    }
}
