//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The in-memory repository stands in for the HTTP adapter at the port
//! boundary; router-level tests use the real adapter against wiremock.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
