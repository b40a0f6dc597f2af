//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client used for reverse-geocoding requests.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration (Nominatim requires one)
/// - Per-request timeout from the configuration
///
/// The timeout bounds every lookup; exceeding it is a recoverable
/// per-coordinate failure, handled by the lookup's fallback path.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
