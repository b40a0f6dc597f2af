//! Timeline parsing: classification, normalization, and orchestration.
//!
//! [`parse_timeline`] is the single entry point that takes a raw activity
//! sequence to an address-enriched trip list. It is async (it suspends at
//! every remote geocoding call made by the scheduler) and total with respect
//! to its input: malformed records are excluded, never surfaced as errors.

mod classify;
mod normalize;

pub use classify::{is_vehicle_activity, VEHICLE_KEYWORDS};
pub use normalize::normalize_trip;

use log::info;

use crate::geocode::{scheduler::geocode_trips, GeocodeSession};
use crate::model::{NormalizedTrip, RawActivityRecord, TripPurpose};

/// Parses a raw activity sequence into an address-enriched trip list.
///
/// Resets the session statistics, classifies and normalizes every record
/// (discarding non-qualifying ones), sorts trips by calendar date descending,
/// then drives the batch geocoding scheduler and returns the trips with
/// addresses resolved. `progress` receives cumulative
/// `(processed, total_distinct_coordinates)` during geocoding.
///
/// There is no mid-flight cancellation: a caller that abandons a run simply
/// drops the future. A later invocation on the same session reuses the warm
/// address cache.
pub async fn parse_timeline<F>(
    records: &[RawActivityRecord],
    session: &GeocodeSession,
    default_purpose: TripPurpose,
    progress: F,
) -> Vec<NormalizedTrip>
where
    F: FnMut(usize, usize),
{
    session.stats().reset();

    let mut trips: Vec<NormalizedTrip> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| is_vehicle_activity(record))
        .filter_map(|(index, record)| normalize_trip(record, index, default_purpose))
        .collect();

    // Newest first; the sort is stable, so same-date trips keep input order
    trips.sort_by(|a, b| b.date.cmp(&a.date));

    info!(
        "Classified {} of {} records as vehicle trips",
        trips.len(),
        records.len()
    );

    geocode_trips(session, &mut trips, progress).await;

    trips
}
