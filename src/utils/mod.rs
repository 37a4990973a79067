//! Utility functions shared across the application.
//!
//! - [`url_check`] - Target URL acceptance rules

pub mod url_check;
