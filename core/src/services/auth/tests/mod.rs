//! Tests for the authentication orchestrator
