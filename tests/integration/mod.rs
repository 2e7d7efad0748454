//! Shared fixtures for integration tests against a mock triage backend

pub mod mock_server;
