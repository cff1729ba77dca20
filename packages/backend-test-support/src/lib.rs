//! Backend test support utilities
//!
//! Response-envelope assertions, unique test data, and unified logging
//! initialization shared by the backend's unit and integration tests.

pub mod envelope;
pub mod logging;
pub mod unique_helpers;
