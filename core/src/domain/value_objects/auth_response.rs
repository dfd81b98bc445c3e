//! Authentication response value object.

use serde::{Deserialize, Serialize};

/// Response returned after a successful OTP verification
///
/// Carries the signed session token and whether this login created the
/// user record (first verification for the phone number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed session token for subsequent requests
    pub token: String,

    /// Whether the user was created by this login
    pub is_new: bool,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(token: String, is_new: bool) -> Self {
        Self { token, is_new }
    }
}
