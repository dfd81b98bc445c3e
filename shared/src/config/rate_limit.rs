//! Rate limiting configuration module

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Sliding-window rate limiting configuration
///
/// Bounds how many OTP issuance requests a single identity key may make
/// within the trailing window.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Max admitted requests per key within the window
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Window length in seconds, evaluated relative to "now"
    #[serde(default = "default_window_seconds")]
    pub window_seconds: i64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            window_seconds: default_window_seconds(),
        }
    }
}

impl RateLimitConfig {
    /// Create a new configuration with explicit values
    pub fn new(limit: u32, window_seconds: i64) -> Self {
        Self {
            limit,
            window_seconds,
        }
    }

    /// Window length as a duration
    pub fn window(&self) -> Duration {
        Duration::seconds(self.window_seconds)
    }

    /// Create a development configuration (more lenient limits)
    pub fn development() -> Self {
        Self {
            limit: 30,
            window_seconds: 60,
        }
    }

    /// Create a production configuration (stricter limits)
    pub fn production() -> Self {
        Self::default()
    }
}

fn default_limit() -> u32 {
    3
}

fn default_window_seconds() -> i64 {
    60  // 1 minute
}
