//! Configuration for the authentication orchestrator

use serde::{Deserialize, Serialize};

/// Configuration for the authentication orchestrator
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthServiceConfig {
    /// Deadline applied to each collaborator call, in seconds
    #[serde(default = "default_io_timeout_seconds")]
    pub io_timeout_seconds: u64,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            io_timeout_seconds: default_io_timeout_seconds(),
        }
    }
}

impl AuthServiceConfig {
    /// Get the per-call deadline as a std Duration
    pub fn io_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.io_timeout_seconds)
    }

    /// Set the per-call deadline in seconds
    pub fn with_io_timeout_seconds(mut self, seconds: u64) -> Self {
        self.io_timeout_seconds = seconds;
        self
    }
}

fn default_io_timeout_seconds() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deadline() {
        let config = AuthServiceConfig::default();
        assert_eq!(config.io_timeout(), std::time::Duration::from_secs(5));
    }
}
