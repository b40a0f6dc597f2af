//! Monthly mileage aggregation.

use std::collections::BTreeMap;

use crate::model::{MonthlySummary, NormalizedTrip, TripPurpose};

/// Folds a trip collection into per-month mileage summaries.
///
/// Trips are grouped by the `YYYY-MM` prefix of their date. Every trip
/// contributes to its month's total; categorized purposes additionally
/// contribute to their breakout column, while Unassigned trips appear in the
/// total only. The result is sorted by month descending (most recent first).
///
/// Pure and idempotent: recomputation over an unmodified collection yields
/// identical results, and purpose or distance mutations are reflected on the
/// next call because nothing is cached.
pub fn monthly_summaries(trips: &[NormalizedTrip]) -> Vec<MonthlySummary> {
    let mut by_month: BTreeMap<&str, MonthlySummary> = BTreeMap::new();

    for trip in trips {
        let Some(month) = trip.date.get(..7) else {
            continue;
        };
        let summary = by_month
            .entry(month)
            .or_insert_with(|| MonthlySummary::new(month));
        summary.total_miles += trip.distance_miles;
        match trip.purpose {
            TripPurpose::Business => summary.business_miles += trip.distance_miles,
            TripPurpose::Personal => summary.personal_miles += trip.distance_miles,
            TripPurpose::Medical => summary.medical_miles += trip.distance_miles,
            TripPurpose::Charitable => summary.charitable_miles += trip.distance_miles,
            TripPurpose::Other => summary.other_miles += trip.distance_miles,
            TripPurpose::Unassigned => {}
        }
    }

    // BTreeMap iterates months ascending; reverse for newest-first
    by_month.into_values().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PENDING_ADDRESS;

    fn trip(date: &str, miles: f64, purpose: TripPurpose) -> NormalizedTrip {
        NormalizedTrip {
            id: format!("trip-{date}-{miles}"),
            date: date.to_string(),
            start_time_local: "09:00 AM".to_string(),
            end_time_local: "09:30 AM".to_string(),
            duration_minutes: 30,
            distance_miles: miles,
            start_coord: "geo:42.3601,-71.0589".to_string(),
            end_coord: "geo:42.3736,-71.1097".to_string(),
            start_address: PENDING_ADDRESS.to_string(),
            end_address: PENDING_ADDRESS.to_string(),
            purpose,
            notes: String::new(),
        }
    }

    #[test]
    fn test_trips_group_by_month() {
        let trips = vec![
            trip("2025-01-15", 12.5, TripPurpose::Business),
            trip("2025-01-20", 3.0, TripPurpose::Personal),
            trip("2025-02-01", 7.25, TripPurpose::Business),
        ];
        let summaries = monthly_summaries(&trips);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].month, "2025-02");
        assert_eq!(summaries[1].month, "2025-01");
        assert_eq!(summaries[1].total_miles, 15.5);
        assert_eq!(summaries[1].business_miles, 12.5);
        assert_eq!(summaries[1].personal_miles, 3.0);
    }

    #[test]
    fn test_months_are_sorted_newest_first() {
        let trips = vec![
            trip("2024-11-01", 1.0, TripPurpose::Other),
            trip("2025-03-01", 1.0, TripPurpose::Other),
            trip("2025-01-01", 1.0, TripPurpose::Other),
        ];
        let months: Vec<String> = monthly_summaries(&trips)
            .into_iter()
            .map(|s| s.month)
            .collect();
        assert_eq!(months, vec!["2025-03", "2025-01", "2024-11"]);
    }

    #[test]
    fn test_unassigned_miles_count_toward_total_only() {
        let trips = vec![
            trip("2025-01-15", 10.0, TripPurpose::Unassigned),
            trip("2025-01-16", 5.0, TripPurpose::Medical),
        ];
        let summaries = monthly_summaries(&trips);
        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.total_miles, 15.0);
        assert_eq!(summary.categorized_miles(), 5.0);
        assert_eq!(summary.medical_miles, 5.0);
    }

    #[test]
    fn test_purpose_partition_sums_to_total() {
        let trips = vec![
            trip("2025-04-01", 1.5, TripPurpose::Business),
            trip("2025-04-02", 2.25, TripPurpose::Personal),
            trip("2025-04-03", 3.0, TripPurpose::Medical),
            trip("2025-04-04", 4.75, TripPurpose::Charitable),
            trip("2025-04-05", 5.5, TripPurpose::Other),
            trip("2025-04-06", 6.0, TripPurpose::Unassigned),
        ];
        let summary = &monthly_summaries(&trips)[0];
        let unassigned = 6.0;
        assert!((summary.categorized_miles() + unassigned - summary.total_miles).abs() < 1e-9);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let trips = vec![
            trip("2025-01-15", 12.5, TripPurpose::Business),
            trip("2025-02-01", 7.25, TripPurpose::Unassigned),
        ];
        assert_eq!(monthly_summaries(&trips), monthly_summaries(&trips));
    }

    #[test]
    fn test_mutations_are_reflected_on_recomputation() {
        let mut trips = vec![trip("2025-01-15", 12.5, TripPurpose::Unassigned)];
        let before = monthly_summaries(&trips);
        assert_eq!(before[0].business_miles, 0.0);

        trips[0].purpose = TripPurpose::Business;
        let after = monthly_summaries(&trips);
        assert_eq!(after[0].business_miles, 12.5);
        assert_eq!(after[0].total_miles, 12.5);
    }

    #[test]
    fn test_empty_collection_yields_no_summaries() {
        assert!(monthly_summaries(&[]).is_empty());
    }
}
