//! Vehicle-activity classification.

use crate::model::RawActivityRecord;

/// Mode-label substrings that mark a record as vehicle travel.
pub const VEHICLE_KEYWORDS: [&str; 5] = [
    "vehicle",
    "car",
    "passenger vehicle",
    "driving",
    "automobile",
];

/// Returns true iff the record represents vehicle travel.
///
/// The match is a case-insensitive substring test of the mode label against
/// [`VEHICLE_KEYWORDS`]. Records without an activity descriptor, without a
/// top candidate, or with an empty label are never trips. Total: absence of
/// expected fields yields `false`, never a failure.
pub fn is_vehicle_activity(record: &RawActivityRecord) -> bool {
    let Some(label) = record
        .activity
        .as_ref()
        .and_then(|activity| activity.top_candidate.as_ref())
        .and_then(|candidate| candidate.kind.as_deref())
    else {
        return false;
    };
    let label = label.to_lowercase();
    VEHICLE_KEYWORDS
        .iter()
        .any(|keyword| label.contains(keyword))
}
