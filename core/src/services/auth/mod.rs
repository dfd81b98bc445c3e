//! Authentication orchestration module
//!
//! This module ties the authentication flow together:
//! - OTP issuance with per-key rate limiting and pluggable delivery
//! - OTP verification with single-use consumption
//! - Account resolution and session token issuance on login
//! - Deadlines around every external collaborator call

mod config;
mod delivery;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use delivery::{ConsoleDelivery, DeliveryChannel};
pub use service::AuthService;
