//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `otp` - OTP lifetime, code shape, and expiry sweep cadence
//! - `rate_limit` - Sliding-window throttling of OTP issuance
//! - `token` - Session token signing secret and expiry
//!
//! All values are startup-time immutable; services take a copy at
//! construction and never re-read them.

pub mod otp;
pub mod rate_limit;
pub mod token;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use otp::{OtpConfig, DEFAULT_OTP_ALPHABET};
pub use rate_limit::RateLimitConfig;
pub use token::TokenConfig;

/// Complete authentication configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// OTP configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Session token configuration
    #[serde(default)]
    pub token: TokenConfig,
}

impl AuthConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            otp: OtpConfig::default(),
            rate_limit: RateLimitConfig::default(),
            token: TokenConfig::from_env(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            otp: OtpConfig::default(),
            rate_limit: RateLimitConfig::default(),
            token: TokenConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert_eq!(config.otp.ttl_seconds, 120);
        assert_eq!(config.rate_limit.limit, 3);
        assert_eq!(config.token.expiry_seconds, 900);
    }

    #[test]
    fn test_auth_config_deserializes_with_partial_input() {
        let config: AuthConfig =
            serde_json::from_str(r#"{"rate_limit": {"limit": 5}}"#).unwrap();
        assert_eq!(config.rate_limit.limit, 5);
        assert_eq!(config.rate_limit.window_seconds, 60);
        assert_eq!(config.otp.code_length, 6);
    }
}
