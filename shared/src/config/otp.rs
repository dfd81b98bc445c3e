//! OTP lifecycle configuration

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Default alphabet for generated codes (digits only)
pub const DEFAULT_OTP_ALPHABET: &str = "1234567890";

/// OTP configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// How long a stored code stays valid, in seconds
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: i64,

    /// Number of characters in a generated code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Characters codes are drawn from
    #[serde(default = "default_alphabet")]
    pub alphabet: String,

    /// How often the background sweep evicts expired codes, in seconds
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
            code_length: default_code_length(),
            alphabet: default_alphabet(),
            sweep_interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

impl OtpConfig {
    /// Code time-to-live as a duration
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.ttl_seconds)
    }

    /// Sweep interval as a std duration (for timers)
    pub fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.sweep_interval_seconds)
    }

    /// Set the code time-to-live in seconds
    pub fn with_ttl_seconds(mut self, seconds: i64) -> Self {
        self.ttl_seconds = seconds;
        self
    }

    /// Set the generated code length
    pub fn with_code_length(mut self, length: usize) -> Self {
        self.code_length = length;
        self
    }

    /// Set the sweep interval in seconds
    pub fn with_sweep_interval_seconds(mut self, seconds: u64) -> Self {
        self.sweep_interval_seconds = seconds;
        self
    }
}

fn default_ttl_seconds() -> i64 {
    120  // 2 minutes
}

fn default_code_length() -> usize {
    6
}

fn default_alphabet() -> String {
    String::from(DEFAULT_OTP_ALPHABET)
}

fn default_sweep_interval_seconds() -> u64 {
    60  // 1 minute
}
