//! Trip normalization: one qualifying activity record to one trip entity.

use chrono::{DateTime, Local, Utc};
use log::{debug, warn};

use crate::config::{METERS_PER_MILE, PENDING_ADDRESS};
use crate::model::{NormalizedTrip, RawActivityRecord, TripPurpose};

/// Converts a qualifying activity record into a [`NormalizedTrip`].
///
/// The calendar date is the UTC date component of the start instant;
/// time-of-day strings are 12-hour local-time renderings; duration is the
/// rounded whole-minute difference; distance is meters converted to miles
/// at 2 decimal places. The trip id is unique within a parsing run (input
/// index plus generation time).
///
/// Returns `None` for records the classifier accepted but that are missing
/// or corrupt below the label: unparseable timestamps or distance, or absent
/// coordinates. Such records are excluded silently; they are a data-quality
/// artifact, not an error condition.
pub fn normalize_trip(
    record: &RawActivityRecord,
    index: usize,
    default_purpose: TripPurpose,
) -> Option<NormalizedTrip> {
    let activity = record.activity.as_ref()?;

    let start = parse_instant(&record.start_time, index)?;
    let end = parse_instant(&record.end_time, index)?;

    let meters: f64 = activity.distance_meters.as_deref()?.trim().parse().ok()?;
    if !meters.is_finite() || meters < 0.0 {
        debug!("Record {index} has a nonsensical distance ({meters}); skipping");
        return None;
    }
    let distance_miles = (meters / METERS_PER_MILE * 100.0).round() / 100.0;

    let raw_minutes = (end - start).num_seconds() as f64 / 60.0;
    let duration_minutes = if raw_minutes < 0.0 {
        // Exporter clock skew: the segment ends before it starts. The
        // distance is still real, so keep the trip with a zero duration.
        warn!(
            "Record {index} ends before it starts ({} -> {}); clamping duration to zero",
            record.start_time, record.end_time
        );
        0
    } else {
        raw_minutes.round() as u32
    };

    let start_coord = activity.start.as_ref()?.clone();
    let end_coord = activity.end.as_ref()?.clone();

    Some(NormalizedTrip {
        id: format!("trip-{}-{}", index, Utc::now().timestamp_millis()),
        date: start.format("%Y-%m-%d").to_string(),
        start_time_local: format_local_time(start),
        end_time_local: format_local_time(end),
        duration_minutes,
        distance_miles,
        start_coord,
        end_coord,
        start_address: PENDING_ADDRESS.to_string(),
        end_address: PENDING_ADDRESS.to_string(),
        purpose: default_purpose,
        notes: String::new(),
    })
}

fn parse_instant(timestamp: &str, index: usize) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(instant) => Some(instant.with_timezone(&Utc)),
        Err(e) => {
            debug!("Record {index} has an unparseable timestamp {timestamp:?}: {e}");
            None
        }
    }
}

fn format_local_time(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%I:%M %p").to_string()
}
