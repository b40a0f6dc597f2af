//! Input loading tests: file handling and top-level structure validation.

use std::io::Write;

use tempfile::NamedTempFile;

use trip_ledger::model::load_activity_records;
use trip_ledger::InputError;

fn file_with(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[tokio::test]
async fn test_valid_array_loads_all_records() {
    let file = file_with(
        r#"[
            {"startTime": "2025-01-15T14:00:00Z", "endTime": "2025-01-15T14:20:00Z",
             "activity": {"topCandidate": {"type": "driving"}, "start": "geo:1,2",
                          "end": "geo:3,4", "distanceMeters": "100"}},
            {"startTime": "2025-01-15T09:00:00Z", "endTime": "2025-01-15T10:00:00Z",
             "visit": {"topCandidate": {"placeId": "abc"}}}
        ]"#,
    );

    let records = load_activity_records(file.path()).await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].activity.is_some());
    assert!(records[1].activity.is_none());
}

#[tokio::test]
async fn test_empty_array_is_valid() {
    let file = file_with("[]");
    let records = load_activity_records(file.path()).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_top_level_object_is_rejected() {
    let file = file_with(r#"{"records": []}"#);
    let result = load_activity_records(file.path()).await;
    assert!(matches!(result, Err(InputError::Malformed(_))));
}

#[tokio::test]
async fn test_invalid_json_is_rejected() {
    let file = file_with("not json at all");
    let result = load_activity_records(file.path()).await;
    assert!(matches!(result, Err(InputError::Malformed(_))));
}

#[tokio::test]
async fn test_missing_file_is_rejected() {
    let result =
        load_activity_records(std::path::Path::new("/nonexistent/timeline.json")).await;
    assert!(matches!(result, Err(InputError::Unreadable { .. })));
}

#[tokio::test]
async fn test_record_with_extra_fields_still_loads() {
    // Export revisions add fields; loading must tolerate them
    let file = file_with(
        r#"[{"startTime": "2025-01-15T14:00:00Z", "endTime": "2025-01-15T14:20:00Z",
             "timelinePath": [{"point": "geo:1,2"}],
             "activity": {"topCandidate": {"type": "driving", "probability": "0.9"},
                          "start": "geo:1,2", "end": "geo:3,4",
                          "distanceMeters": "100", "parking": {"location": "geo:1,2"}}}]"#,
    );
    let records = load_activity_records(file.path()).await.unwrap();
    assert_eq!(records.len(), 1);
}
