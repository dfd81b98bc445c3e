//! OTP lifecycle module
//!
//! This module owns the one-time passcode lifecycle:
//! - Cryptographically secure code generation
//! - Time-bounded storage with at most one live code per identity key
//! - Atomic single-use consumption
//! - Cancellable background eviction of expired codes

mod generator;
mod store;
mod sweeper;

#[cfg(test)]
mod tests;

pub use generator::OtpGenerator;
pub use store::{MemoryOtpStore, OtpStore};
pub use sweeper::{OtpSweeper, SweeperHandle};
