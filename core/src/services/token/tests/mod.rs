//! Tests for the token module
