//! Full-run integration test through the library entry point.

use std::io::Write;

use trip_ledger::model::TripPurpose;
use trip_ledger::{run_report, Config, GeocoderChoice};

#[tokio::test]
async fn test_run_report_with_geocoding_disabled() {
    let dir = tempfile::tempdir().unwrap();

    let input_path = dir.path().join("timeline.json");
    let mut input = std::fs::File::create(&input_path).unwrap();
    input
        .write_all(
            br#"[
                {"startTime": "2025-01-15T14:00:00Z", "endTime": "2025-01-15T14:20:00Z",
                 "activity": {"topCandidate": {"type": "in passenger vehicle"},
                              "start": "geo:42.3601,-71.0589", "end": "geo:42.3736,-71.1097",
                              "distanceMeters": "20116.75"}},
                {"startTime": "2025-02-03T09:00:00Z", "endTime": "2025-02-03T09:30:00Z",
                 "activity": {"topCandidate": {"type": "driving"},
                              "start": "geo:41.8781,-87.6298", "end": "geo:41.9000,-87.6500",
                              "distanceMeters": "8046.7"}},
                {"startTime": "2025-02-03T11:00:00Z", "endTime": "2025-02-03T11:10:00Z",
                 "activity": {"topCandidate": {"type": "walking"},
                              "start": "geo:41.8781,-87.6298", "end": "geo:41.8790,-87.6300",
                              "distanceMeters": "900"}}
            ]"#,
        )
        .unwrap();

    let config = Config {
        file: input_path,
        geocoder: GeocoderChoice::Off,
        default_purpose: TripPurpose::Business,
        trips_out: dir.path().join("trips.csv"),
        summary_out: dir.path().join("summary.csv"),
        jsonl_out: Some(dir.path().join("trips.jsonl")),
        ..Default::default()
    };

    let report = run_report(config).await.unwrap();

    assert_eq!(report.total_records, 3);
    assert_eq!(report.trip_count, 2);
    assert_eq!(report.month_count, 2);
    assert_eq!(report.geocoding.total_addresses, 4);
    assert_eq!(report.geocoding.unique_coordinates, 4);
    // Geocoding is off, so every distinct coordinate fell back
    assert_eq!(report.geocoding.fallbacks, 4);
    assert_eq!(report.geocoding.fresh_api_calls, 0);

    let trips_csv = std::fs::read_to_string(&report.trips_path).unwrap();
    // Header plus two trips, newest first
    let lines: Vec<&str> = trips_csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("2025-02-03"));
    assert!(lines[2].contains("2025-01-15"));
    assert!(lines[1].contains("5.00")); // 8046.7 m is five miles
    assert!(lines[2].contains("12.50"));

    let summary_csv = std::fs::read_to_string(&report.summary_path).unwrap();
    let lines: Vec<&str> = summary_csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("2025-02,5.00"));
    assert!(lines[2].starts_with("2025-01,12.50"));

    let jsonl = std::fs::read_to_string(dir.path().join("trips.jsonl")).unwrap();
    assert_eq!(jsonl.lines().count(), 2);
}

#[tokio::test]
async fn test_run_report_rejects_malformed_input() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("bad.json");
    std::fs::write(&input_path, b"{\"not\": \"an array\"}").unwrap();

    let config = Config {
        file: input_path,
        geocoder: GeocoderChoice::Off,
        trips_out: dir.path().join("trips.csv"),
        summary_out: dir.path().join("summary.csv"),
        ..Default::default()
    };

    let err = run_report(config).await.unwrap_err();
    assert!(format!("{err:#}").contains("activity records"));
}
