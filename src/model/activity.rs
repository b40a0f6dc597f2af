//! Input model for the location-history export.
//!
//! The export is a JSON array of activity records. Each record covers a time
//! interval and may carry an `activity` descriptor with a detected travel
//! mode, start/end coordinates, and a distance. Records without a descriptor
//! (visits, timeline gaps) are tolerated and simply never classify as trips.

use std::path::Path;

use serde::Deserialize;
use tokio::io::AsyncReadExt;

use crate::error_handling::InputError;

/// One entry from the location-history export.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActivityRecord {
    /// Interval start, RFC 3339
    pub start_time: String,
    /// Interval end, RFC 3339
    pub end_time: String,
    /// Travel descriptor; absent for non-movement records
    #[serde(default)]
    pub activity: Option<ActivityDetails>,
}

/// The travel portion of an activity record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDetails {
    /// The exporter's best guess at the travel mode
    #[serde(default)]
    pub top_candidate: Option<TopCandidate>,
    /// Start coordinate, typically `geo:lat,lon`
    #[serde(default)]
    pub start: Option<String>,
    /// End coordinate, typically `geo:lat,lon`
    #[serde(default)]
    pub end: Option<String>,
    /// Distance covered, meters, encoded as a string in the export
    #[serde(default)]
    pub distance_meters: Option<String>,
}

/// The highest-probability travel-mode candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCandidate {
    /// Free-text mode label, e.g. "in passenger vehicle" or "walking"
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Exporter-reported confidence, unused here
    #[serde(default)]
    pub probability: Option<String>,
}

/// Loads activity records from a file path, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns [`InputError::Unreadable`] if the file cannot be read, or
/// [`InputError::Malformed`] if the top-level JSON value is not an array of
/// activity records. Individual records that merely lack trip fields are NOT
/// errors; they deserialize with empty descriptors and are excluded during
/// classification.
pub async fn load_activity_records(path: &Path) -> Result<Vec<RawActivityRecord>, InputError> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .map_err(|source| InputError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        buffer
    } else {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| InputError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?
    };

    let records: Vec<RawActivityRecord> = serde_json::from_str(&content)?;
    Ok(records)
}
