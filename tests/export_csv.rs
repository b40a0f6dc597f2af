//! Export round-trip tests through temporary files.

use trip_ledger::export::{export_summary_csv, export_trips_csv, export_trips_jsonl};
use trip_ledger::model::{MonthlySummary, NormalizedTrip, TripPurpose};

fn sample_trip() -> NormalizedTrip {
    NormalizedTrip {
        id: "trip-0-1736949600000".to_string(),
        date: "2025-01-15".to_string(),
        start_time_local: "09:00 AM".to_string(),
        end_time_local: "09:20 AM".to_string(),
        duration_minutes: 20,
        distance_miles: 12.5,
        start_coord: "geo:42.3601,-71.0589".to_string(),
        end_coord: "geo:42.3736,-71.1097".to_string(),
        start_address: "123 Main Street, Boston, Massachusetts".to_string(),
        end_address: "42.3736, -71.1097".to_string(),
        purpose: TripPurpose::Business,
        notes: "client visit".to_string(),
    }
}

#[test]
fn test_trips_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trips.csv");

    let count = export_trips_csv(&[sample_trip()], &path).unwrap();
    assert_eq!(count, 1);

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("id,date,start_time,end_time"));

    let row = lines.next().unwrap();
    assert!(row.contains("2025-01-15"));
    assert!(row.contains("12.50"));
    assert!(row.contains("Business"));
    // The address contains commas, so the writer must have quoted it
    assert!(row.contains("\"123 Main Street, Boston, Massachusetts\""));
    assert!(lines.next().is_none());
}

#[test]
fn test_summary_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.csv");

    let summary = MonthlySummary {
        business_miles: 12.5,
        total_miles: 20.0,
        ..MonthlySummary::new("2025-01")
    };
    let count = export_summary_csv(&[summary], &path).unwrap();
    assert_eq!(count, 1);

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "month,business_miles,personal_miles,medical_miles,charitable_miles,other_miles,total_miles"
    );
    assert_eq!(lines.next().unwrap(), "2025-01,12.50,0.00,0.00,0.00,0.00,20.00");
}

#[test]
fn test_jsonl_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trips.jsonl");

    let count = export_trips_jsonl(&[sample_trip(), sample_trip()], &path).unwrap();
    assert_eq!(count, 2);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(parsed["date"], "2025-01-15");
    assert_eq!(parsed["purpose"], "Business");
    assert_eq!(parsed["distance_miles"], 12.5);
}

#[test]
fn test_export_to_unwritable_path_errors() {
    let result = export_trips_csv(&[sample_trip()], std::path::Path::new("/nonexistent/dir/out.csv"));
    assert!(result.is_err());
}
