//! Backend test support utilities
//!
//! Shared helpers for the backend integration tests: one-time logging
//! initialization, unique test identifiers and Problem Details assertions.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
