//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - The HTTP client used for geocoding requests
//! - The logger
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
