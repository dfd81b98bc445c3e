//! # PhoneAuth Core
//!
//! Core authentication state machine for the PhoneAuth backend.
//! This crate contains the OTP lifecycle (generation, time-bounded storage,
//! single-use consumption), per-identity request throttling, stateless
//! session-token issuance, identity resolution, and the orchestrator that
//! composes them into the issue/verify operations.

pub mod clock;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use clock::*;
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
