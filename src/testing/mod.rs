//! Testing utilities
//!
//! Fixtures shaped like news API responses and a minimal mock tool, shared by
//! unit tests and the integration tests under `tests/`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
