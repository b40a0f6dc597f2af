//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the application,
//! including pacing intervals, timeouts, precision settings, and other operational
//! parameters.

use std::time::Duration;

/// Meters per statute mile, used to convert exported trip distances.
pub const METERS_PER_MILE: f64 = 1609.34;

/// Decimal places kept when normalizing a coordinate for cache keys.
///
/// Three places is roughly 100 m of precision, which groups physically-close
/// endpoints (the same parking lot, the same block) under one cache entry.
pub const COORD_CACHE_PRECISION: usize = 3;

/// Decimal places used when rendering a coordinate as a fallback address.
pub const COORD_DISPLAY_PRECISION: usize = 4;

/// Placeholder address assigned to trips before geocoding completes.
pub const PENDING_ADDRESS: &str = "Pending lookup";

/// Per-request reverse-geocoding timeout in seconds.
///
/// Applied at the HTTP client level. A lookup that exceeds this is treated as
/// a recoverable per-coordinate failure, never a fatal abort of the batch.
pub const GEOCODE_TIMEOUT_SECS: u64 = 8;

/// Responses faster than this are assumed to have been served by an
/// HTTP-level cache rather than a live geocoder round trip. Observability
/// only; both paths are handled identically.
pub const TRANSPORT_CACHE_LATENCY: Duration = Duration::from_millis(50);

/// Minimum interval between dispatches against the public Nominatim instance.
///
/// Nominatim's usage policy allows at most one request per second; 1100 ms
/// keeps a small margin under sustained load.
pub const NOMINATIM_PACING_INTERVAL: Duration = Duration::from_millis(1100);

/// Maximum simultaneous in-flight lookups against Nominatim.
pub const NOMINATIM_MAX_IN_FLIGHT: usize = 1;

/// Minimum interval between dispatches against LocationIQ.
///
/// The free tier allows 2 requests per second.
pub const LOCATIONIQ_PACING_INTERVAL: Duration = Duration::from_millis(500);

/// Maximum simultaneous in-flight lookups against LocationIQ.
pub const LOCATIONIQ_MAX_IN_FLIGHT: usize = 2;

/// Default endpoint base for the public Nominatim instance.
pub const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Default endpoint base for LocationIQ.
pub const LOCATIONIQ_BASE_URL: &str = "https://us1.locationiq.com";

/// How many resolved coordinates between geocoding progress log lines.
pub const PROGRESS_LOG_INTERVAL: usize = 10;

/// Default User-Agent for geocoding requests.
///
/// Nominatim's usage policy requires an identifying User-Agent; requests
/// without one are rejected. Overridable via the `--user-agent` flag.
pub const DEFAULT_USER_AGENT: &str = "trip_ledger/0.1";
