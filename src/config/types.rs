//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_USER_AGENT;
use crate::model::TripPurpose;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which reverse-geocoding backend to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GeocoderChoice {
    /// LocationIQ when an API key is configured, Nominatim otherwise
    Auto,
    /// Public Nominatim instance (no key required, 1 request/second)
    Nominatim,
    /// LocationIQ (requires an API key)
    Locationiq,
    /// No remote lookups; every address falls back to formatted coordinates
    Off,
}

/// Application configuration.
///
/// Doubles as the CLI surface (via clap derive) and the programmatic library
/// configuration (via `Default` plus struct update syntax).
///
/// # Examples
///
/// ```no_run
/// use trip_ledger::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("timeline.json"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "trip_ledger",
    version,
    about = "Extracts vehicle trips from a location-history export, reverse-geocodes them, and builds monthly mileage summaries"
)]
pub struct Config {
    /// Location-history export file (a JSON array of activity records), or `-` for stdin
    pub file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Reverse-geocoding backend
    #[arg(long, value_enum, default_value = "auto")]
    pub geocoder: GeocoderChoice,

    /// Override the geocoder endpoint base URL (self-hosted instances, tests)
    #[arg(long)]
    pub geocoder_url: Option<String>,

    /// LocationIQ API key
    #[arg(long, env = "LOCATIONIQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Per-lookup timeout in seconds
    #[arg(long, default_value_t = crate::config::constants::GEOCODE_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Purpose assigned to every extracted trip until reclassified
    #[arg(long, value_enum, default_value = "unassigned")]
    pub default_purpose: TripPurpose,

    /// Trips CSV output path
    #[arg(long, default_value = "./trips.csv")]
    pub trips_out: PathBuf,

    /// Monthly summary CSV output path
    #[arg(long, default_value = "./monthly_summary.csv")]
    pub summary_out: PathBuf,

    /// Optional JSONL dump of the enriched trip list
    #[arg(long)]
    pub jsonl_out: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("timeline.json"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            geocoder: GeocoderChoice::Auto,
            geocoder_url: None,
            api_key: None,
            timeout_seconds: crate::config::constants::GEOCODE_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_purpose: TripPurpose::Unassigned,
            trips_out: PathBuf::from("./trips.csv"),
            summary_out: PathBuf::from("./monthly_summary.csv"),
            jsonl_out: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout_seconds, 8);
        assert_eq!(config.geocoder, GeocoderChoice::Auto);
        assert!(config.api_key.is_none());
        assert!(config.jsonl_out.is_none());
        assert_eq!(config.default_purpose, TripPurpose::Unassigned);
        assert_eq!(config.trips_out, PathBuf::from("./trips.csv"));
    }
}
