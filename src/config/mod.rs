//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (pacing intervals, timeouts, precision settings)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, GeocoderChoice, LogFormat, LogLevel};
