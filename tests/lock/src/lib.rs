//! Shared fixtures for the acceptance tests.
