//! Shared utilities and common types for the PhoneAuth server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types with serde defaults
//! - Pagination types for list endpoints

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, OtpConfig, RateLimitConfig, TokenConfig, DEFAULT_OTP_ALPHABET};
pub use types::{PaginatedResponse, Pagination};
