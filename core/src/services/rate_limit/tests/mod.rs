//! Tests for the rate limiting module
