//! Geocoding statistics tracking.
//!
//! Thread-safe counters over a single parsing run, reset at the start of each
//! parse and read-only to callers afterward via [`StatsSnapshot`].

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

/// Where a resolved address came from.
///
/// `TransportCache` is inferred purely from response latency (a sub-threshold
/// round trip almost certainly never left an HTTP-level cache) and exists for
/// observability only; it is handled identically to `Api` everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum AddressSource {
    /// Served from the in-process cache, no I/O
    MemoryCache,
    /// Remote response fast enough to indicate an HTTP-level cache
    TransportCache,
    /// Fresh remote round trip
    Api,
    /// Formatted coordinate string after a failure or missing configuration
    Fallback,
}

impl AddressSource {
    /// Returns a human-readable string representation of the source.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressSource::MemoryCache => "Memory cache hits",
            AddressSource::TransportCache => "Transport cache hits",
            AddressSource::Api => "Fresh API calls",
            AddressSource::Fallback => "Coordinate fallbacks",
        }
    }
}

impl std::fmt::Display for AddressSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thread-safe geocoding counters for one parsing run.
///
/// Shared across lookup tasks via the session; all counters are atomic so
/// concurrent in-flight lookups can record without coordination.
#[derive(Debug, Default)]
pub struct GeocodingStats {
    total_addresses: AtomicUsize,
    unique_coordinates: AtomicUsize,
    memory_cache_hits: AtomicUsize,
    transport_cache_hits: AtomicUsize,
    fresh_api_calls: AtomicUsize,
    fallbacks: AtomicUsize,
}

impl GeocodingStats {
    /// Creates a zeroed statistics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every counter to zero. Called at the start of each parse.
    pub fn reset(&self) {
        self.total_addresses.store(0, Ordering::SeqCst);
        self.unique_coordinates.store(0, Ordering::SeqCst);
        self.memory_cache_hits.store(0, Ordering::SeqCst);
        self.transport_cache_hits.store(0, Ordering::SeqCst);
        self.fresh_api_calls.store(0, Ordering::SeqCst);
        self.fallbacks.store(0, Ordering::SeqCst);
    }

    /// Records the batch dimensions: total address slots (two per trip) and
    /// the count of distinct normalized coordinates among them.
    pub fn set_batch_totals(&self, total_addresses: usize, unique_coordinates: usize) {
        self.total_addresses.store(total_addresses, Ordering::SeqCst);
        self.unique_coordinates
            .store(unique_coordinates, Ordering::SeqCst);
    }

    /// Increments the counter for one resolved address.
    pub fn record(&self, source: AddressSource) {
        let counter = match source {
            AddressSource::MemoryCache => &self.memory_cache_hits,
            AddressSource::TransportCache => &self.transport_cache_hits,
            AddressSource::Api => &self.fresh_api_calls,
            AddressSource::Fallback => &self.fallbacks,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the count for one address source.
    pub fn count(&self, source: AddressSource) -> usize {
        let counter = match source {
            AddressSource::MemoryCache => &self.memory_cache_hits,
            AddressSource::TransportCache => &self.transport_cache_hits,
            AddressSource::Api => &self.fresh_api_calls,
            AddressSource::Fallback => &self.fallbacks,
        };
        counter.load(Ordering::SeqCst)
    }

    /// Takes a read-only snapshot of all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_addresses: self.total_addresses.load(Ordering::SeqCst),
            unique_coordinates: self.unique_coordinates.load(Ordering::SeqCst),
            memory_cache_hits: self.memory_cache_hits.load(Ordering::SeqCst),
            transport_cache_hits: self.transport_cache_hits.load(Ordering::SeqCst),
            fresh_api_calls: self.fresh_api_calls.load(Ordering::SeqCst),
            fallbacks: self.fallbacks.load(Ordering::SeqCst),
        }
    }
}

/// Read-only view of [`GeocodingStats`] at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Address slots required by the trip list (two per trip)
    pub total_addresses: usize,
    /// Distinct normalized coordinates among them
    pub unique_coordinates: usize,
    /// Lookups served by the in-process cache
    pub memory_cache_hits: usize,
    /// Remote responses fast enough to indicate an HTTP-level cache
    pub transport_cache_hits: usize,
    /// Fresh remote round trips
    pub fresh_api_calls: usize,
    /// Lookups that fell back to a formatted coordinate
    pub fallbacks: usize,
}
