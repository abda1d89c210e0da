//! Unit tests for the host contracts.
