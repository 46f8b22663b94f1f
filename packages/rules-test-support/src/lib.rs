//! Test support for the rules engine
//!
//! Shared by the unit tests inside `tractor-rules` and its integration tests:
//! one logging bootstrap and one proptest configuration.

pub mod logging;
pub mod proptest_config;

pub use proptest_config::proptest_config;
