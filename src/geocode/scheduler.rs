//! Batch geocoding scheduler.
//!
//! Deduplicates the coordinates a trip list needs, resolves the uncached ones
//! through a paced, bounded-concurrency fan-out, reports progress, and writes
//! the resolved addresses back onto the trips.

use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::debug;

use crate::model::NormalizedTrip;

use super::coord::{format_coord_fallback, normalize_coord};
use super::limiter::init_request_pacer;
use super::stats::AddressSource;
use super::{resolve_address, GeocodeSession};

/// Resolves every address a trip list needs and applies the results.
///
/// Both endpoints of every trip are deduplicated by normalized coordinate
/// (first-seen order, so the enumeration is deterministic for a given trip
/// list). Coordinates already in the session cache are counted as memory
/// hits; the rest are dispatched against the remote backend, at most
/// `backend.max_in_flight()` at a time with a pacer acquire before each
/// dispatch. An individual lookup failure yields a fallback address and the
/// batch continues.
///
/// `progress` is invoked once per resolved coordinate with cumulative
/// `(processed, total_distinct)`; the first argument is strictly increasing
/// and reaches the total exactly once everything is resolved.
pub async fn geocode_trips<F>(session: &GeocodeSession, trips: &mut [NormalizedTrip], mut progress: F)
where
    F: FnMut(usize, usize),
{
    let mut seen = std::collections::HashSet::new();
    let mut distinct: Vec<String> = Vec::new();
    for trip in trips.iter() {
        for coord in [&trip.start_coord, &trip.end_coord] {
            if seen.insert(normalize_coord(coord)) {
                distinct.push(coord.clone());
            }
        }
    }
    let total = distinct.len();
    session.stats().set_batch_totals(trips.len() * 2, total);

    let mut pending: Vec<String> = Vec::new();
    let mut processed = 0usize;
    for coord in distinct {
        if session.cached_address(&normalize_coord(&coord)).is_some() {
            session.stats().record(AddressSource::MemoryCache);
            processed += 1;
            progress(processed, total);
        } else {
            pending.push(coord);
        }
    }
    debug!(
        "Geocoding {} distinct coordinates ({} already cached) via {}",
        total,
        processed,
        session.backend().label()
    );

    if !pending.is_empty() {
        let max_in_flight = session.backend().max_in_flight().max(1);
        let pacer_handle = init_request_pacer(session.backend().pacing_interval(), max_in_flight);

        let mut queue = pending.into_iter();
        let mut in_flight = FuturesUnordered::new();
        loop {
            while in_flight.len() < max_in_flight {
                let Some(coord) = queue.next() else { break };
                let pacer = pacer_handle.as_ref().map(|(pacer, _)| Arc::clone(pacer));
                in_flight.push(async move {
                    if let Some(pacer) = pacer {
                        pacer.acquire().await;
                    }
                    let _ = resolve_address(session, &coord).await;
                });
            }
            if in_flight.next().await.is_none() {
                break;
            }
            processed += 1;
            progress(processed, total);
        }

        if let Some((_, shutdown)) = pacer_handle {
            shutdown.cancel();
        }
    }

    // Every distinct coordinate has resolved; apply addresses from the cache.
    // A coordinate that still has no entry (unparseable, so never cached)
    // gets the formatted-coordinate fallback.
    for trip in trips.iter_mut() {
        trip.start_address = session
            .cached_address(&normalize_coord(&trip.start_coord))
            .unwrap_or_else(|| format_coord_fallback(&trip.start_coord));
        trip.end_address = session
            .cached_address(&normalize_coord(&trip.end_coord))
            .unwrap_or_else(|| format_coord_fallback(&trip.end_coord));
    }
}
