//! Rate limiting for OTP issuance
//!
//! Issuance throttling tracks request timestamps per key over a sliding
//! window. The trait seam lets the orchestrator swap the in-memory
//! limiter for a shared backend without touching call sites.

mod limiter;

#[cfg(test)]
mod tests;

pub use limiter::{RateLimiter, SlidingWindowRateLimiter};
