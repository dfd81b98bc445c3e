//! Tests for the OTP lifecycle module

#[cfg(test)]
mod store_tests;
