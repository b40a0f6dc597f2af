//! Reverse geocoding: session state, cached resolution, batch scheduling.
//!
//! All geocoding state (address cache, statistics, HTTP client, backend) is
//! carried by an explicit [`GeocodeSession`] threaded through the parser and
//! scheduler. There are no module-level globals, so parallel test runs and
//! repeated parses within one process are safe by construction.

pub mod coord;
pub mod limiter;
pub mod provider;
pub mod scheduler;
pub mod stats;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use log::{debug, warn};

use crate::config::TRANSPORT_CACHE_LATENCY;
use coord::{format_coord_fallback, normalize_coord, parse_lat_lon};
use provider::{GeocoderBackend, ReverseGeocodeResponse};
use stats::{AddressSource, GeocodingStats};

/// Session-scoped geocoding state.
///
/// The cache maps normalized coordinates to resolved addresses and is
/// append-only for the life of the session: entries are never evicted,
/// invalidated, or persisted. The mutex guard is only ever held for a plain
/// map read or insert, never across an await point.
pub struct GeocodeSession {
    backend: GeocoderBackend,
    client: Arc<reqwest::Client>,
    cache: Mutex<HashMap<String, String>>,
    stats: GeocodingStats,
}

impl GeocodeSession {
    /// Creates a fresh session with an empty cache and zeroed statistics.
    pub fn new(backend: GeocoderBackend, client: Arc<reqwest::Client>) -> Self {
        Self {
            backend,
            client,
            cache: Mutex::new(HashMap::new()),
            stats: GeocodingStats::new(),
        }
    }

    /// The configured backend.
    pub fn backend(&self) -> &GeocoderBackend {
        &self.backend
    }

    /// Statistics for the most recent (or in-progress) parse.
    pub fn stats(&self) -> &GeocodingStats {
        &self.stats
    }

    /// Looks up a normalized coordinate in the in-process cache.
    pub fn cached_address(&self, normalized: &str) -> Option<String> {
        self.cache
            .lock()
            .expect("geocode cache lock poisoned")
            .get(normalized)
            .cloned()
    }

    /// Number of cached addresses.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().expect("geocode cache lock poisoned").len()
    }

    fn insert(&self, normalized: String, address: String) {
        self.cache
            .lock()
            .expect("geocode cache lock poisoned")
            .insert(normalized, address);
    }
}

/// Resolves a coordinate to a short human-readable address.
///
/// Consults the in-process cache, then issues a single paced remote lookup,
/// and falls back to a formatted `"lat, lon"` string on any failure. This
/// function never returns an error: every path yields a usable address plus
/// its provenance. Fallbacks for *parseable* coordinates are cached under
/// the normalized key so a failing point is attempted at most once per
/// session; an unparseable string is returned as-is without polluting the
/// cache.
pub async fn resolve_address(session: &GeocodeSession, coord: &str) -> (String, AddressSource) {
    let normalized = normalize_coord(coord);

    if let Some(address) = session.cached_address(&normalized) {
        debug!("Geocode cache hit for {normalized}");
        session.stats.record(AddressSource::MemoryCache);
        return (address, AddressSource::MemoryCache);
    }

    let Some((lat, lon)) = parse_lat_lon(coord) else {
        warn!("Unparseable coordinate {coord:?}; using it verbatim");
        session.stats.record(AddressSource::Fallback);
        return (format_coord_fallback(coord), AddressSource::Fallback);
    };

    let Some(request_url) = session.backend.reverse_url(lat, lon) else {
        let fallback = format_coord_fallback(coord);
        session.insert(normalized, fallback.clone());
        session.stats.record(AddressSource::Fallback);
        return (fallback, AddressSource::Fallback);
    };

    let started = Instant::now();
    let address = match session.client.get(&request_url).send().await {
        Ok(response) if response.status().is_success() => {
            match response.json::<ReverseGeocodeResponse>().await {
                Ok(body) => body.compact_address(),
                Err(e) => {
                    warn!("Undecodable geocoder response for {normalized}: {e}");
                    None
                }
            }
        }
        Ok(response) => {
            warn!(
                "Geocoder returned {} for {normalized}",
                response.status()
            );
            None
        }
        Err(e) => {
            warn!("Geocoder request failed for {normalized}: {e}");
            None
        }
    };
    let elapsed = started.elapsed();

    match address {
        Some(address) => {
            session.insert(normalized, address.clone());
            let source = if elapsed < TRANSPORT_CACHE_LATENCY {
                AddressSource::TransportCache
            } else {
                AddressSource::Api
            };
            session.stats.record(source);
            (address, source)
        }
        None => {
            let fallback = format_coord_fallback(coord);
            session.insert(normalized, fallback.clone());
            session.stats.record(AddressSource::Fallback);
            (fallback, AddressSource::Fallback)
        }
    }
}
