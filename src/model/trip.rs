//! Normalized trip entity and the purpose taxonomy.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;

/// User-assigned category of a trip.
///
/// A closed enumeration so aggregation stays exhaustive: adding a variant
/// forces every `match` over purposes to be revisited. `Unassigned` is the
/// creation default; it contributes to monthly totals but has no per-purpose
/// breakout column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, EnumIterMacro,
)]
pub enum TripPurpose {
    /// Business travel
    Business,
    /// Personal travel
    Personal,
    /// Medical travel
    Medical,
    /// Charitable travel
    Charitable,
    /// Anything categorized but not covered above
    Other,
    /// Not yet categorized by the user
    #[default]
    Unassigned,
}

impl TripPurpose {
    /// Returns a human-readable string representation of the purpose.
    pub fn as_str(&self) -> &'static str {
        match self {
            TripPurpose::Business => "Business",
            TripPurpose::Personal => "Personal",
            TripPurpose::Medical => "Medical",
            TripPurpose::Charitable => "Charitable",
            TripPurpose::Other => "Other",
            TripPurpose::Unassigned => "Unassigned",
        }
    }
}

impl std::fmt::Display for TripPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized vehicle trip derived from a qualifying activity record.
///
/// Created once during parsing; `start_address`/`end_address` are overwritten
/// in place when geocoding resolves, and `purpose`/`notes` are mutated by
/// user action afterward. Distance and duration are always non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedTrip {
    /// Identifier unique within one parsing run
    pub id: String,
    /// Calendar date of the trip start (UTC), `YYYY-MM-DD`
    pub date: String,
    /// Local-time start of the trip, 12-hour clock
    pub start_time_local: String,
    /// Local-time end of the trip, 12-hour clock
    pub end_time_local: String,
    /// Whole minutes between start and end, rounded
    pub duration_minutes: u32,
    /// Distance in statute miles, rounded to 2 decimal places
    pub distance_miles: f64,
    /// Raw start coordinate as it appeared in the export
    pub start_coord: String,
    /// Raw end coordinate as it appeared in the export
    pub end_coord: String,
    /// Resolved start address, or a formatted coordinate fallback
    pub start_address: String,
    /// Resolved end address, or a formatted coordinate fallback
    pub end_address: String,
    /// User-assigned purpose category
    pub purpose: TripPurpose,
    /// Free-text note
    pub notes: String,
}
