//! Session token issuance and verification
//!
//! Signs short-lived HS256 JWTs carrying the authenticated user id and
//! verifies them on the way back in. Expiry is judged against the
//! injected [`Clock`](crate::clock::Clock) rather than the decoder's
//! wall clock, so token lifetimes are testable without real waiting.

mod issuer;

#[cfg(test)]
mod tests;

pub use issuer::{TokenIssuer, MIN_SECRET_BYTES};
