//! Admin API Tests
//!
//! Integration tests for the admin HTTP API endpoints.
