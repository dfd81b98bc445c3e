//! Session token configuration

use serde::{Deserialize, Serialize};

/// Session token configuration
///
/// The secret signs and verifies session tokens; the issuer rejects secrets
/// shorter than its minimum length at construction time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Secret key for signing tokens
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Token expiry time in seconds
    #[serde(default = "default_expiry_seconds")]
    pub expiry_seconds: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            expiry_seconds: default_expiry_seconds(),
        }
    }
}

impl TokenConfig {
    /// Create a new token configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.expiry_seconds = minutes * 60;
        self
    }

    /// Get token expiry as a chrono Duration
    pub fn expiry(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.expiry_seconds)
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == default_secret()
    }

    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let secret = std::env::var("AUTH_JWT_SECRET").unwrap_or_else(|_| default_secret());
        let expiry_seconds = std::env::var("AUTH_JWT_EXPIRY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_expiry_seconds);

        Self {
            secret,
            expiry_seconds,
        }
    }
}

fn default_secret() -> String {
    String::from("development-secret-key-change-in-production")
}

fn default_expiry_seconds() -> i64 {
    900  // 15 minutes
}
