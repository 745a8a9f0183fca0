//! Shared doubles and guards for integration tests.
