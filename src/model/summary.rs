//! Monthly mileage summary.

use serde::Serialize;

/// Aggregated mileage for one calendar month.
///
/// Recomputed from the trip collection on demand; never mutated in place.
/// `total_miles` includes Unassigned trips, which have no breakout column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// Calendar month, `YYYY-MM`
    pub month: String,
    /// Miles for Business trips
    pub business_miles: f64,
    /// Miles for Personal trips
    pub personal_miles: f64,
    /// Miles for Medical trips
    pub medical_miles: f64,
    /// Miles for Charitable trips
    pub charitable_miles: f64,
    /// Miles for Other trips
    pub other_miles: f64,
    /// Miles across all purposes, Unassigned included
    pub total_miles: f64,
}

impl MonthlySummary {
    /// Creates an empty summary for the given month.
    pub fn new(month: &str) -> Self {
        Self {
            month: month.to_string(),
            business_miles: 0.0,
            personal_miles: 0.0,
            medical_miles: 0.0,
            charitable_miles: 0.0,
            other_miles: 0.0,
            total_miles: 0.0,
        }
    }

    /// Sum of the per-purpose breakout columns (excludes Unassigned miles).
    pub fn categorized_miles(&self) -> f64 {
        self.business_miles
            + self.personal_miles
            + self.medical_miles
            + self.charitable_miles
            + self.other_miles
    }
}
