//! Unit tests for the service facades.

mod reference;
