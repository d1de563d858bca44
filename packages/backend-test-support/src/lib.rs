//! Backend test support utilities
//!
//! Shared logging initialization and unique fixture data for the backend
//! integration test binaries.

pub mod logging;
pub mod unique_helpers;
