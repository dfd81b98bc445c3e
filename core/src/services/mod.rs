//! Business services containing the authentication flow.

pub mod auth;
pub mod identity;
pub mod otp;
pub mod rate_limit;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, ConsoleDelivery, DeliveryChannel};
pub use identity::IdentityResolver;
pub use otp::{MemoryOtpStore, OtpGenerator, OtpStore, OtpSweeper, SweeperHandle};
pub use rate_limit::{RateLimiter, SlidingWindowRateLimiter};
pub use token::{TokenIssuer, MIN_SECRET_BYTES};
