//! CSV export functionality.
//!
//! Exports trips and monthly summaries to flat CSV files, one row per entity.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::model::{MonthlySummary, NormalizedTrip};

fn writer_for(path: &Path) -> Result<Writer<Box<dyn Write>>> {
    if path.as_os_str() == "-" {
        Ok(Writer::from_writer(Box::new(io::stdout()) as Box<dyn Write>))
    } else {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Writer::from_writer(Box::new(file) as Box<dyn Write>))
    }
}

/// Exports trips to CSV format.
///
/// # Arguments
///
/// * `trips` - The enriched trip list
/// * `output` - Output file path (or stdout if `-`)
///
/// # Returns
///
/// Returns the number of records exported, or an error if export fails.
pub fn export_trips_csv(trips: &[NormalizedTrip], output: &Path) -> Result<usize> {
    let mut writer = writer_for(output)?;

    writer.write_record([
        "id",
        "date",
        "start_time",
        "end_time",
        "duration_minutes",
        "distance_miles",
        "start_address",
        "end_address",
        "start_coord",
        "end_coord",
        "purpose",
        "notes",
    ])?;

    for trip in trips {
        writer.write_record(&[
            trip.id.clone(),
            trip.date.clone(),
            trip.start_time_local.clone(),
            trip.end_time_local.clone(),
            trip.duration_minutes.to_string(),
            format!("{:.2}", trip.distance_miles),
            trip.start_address.clone(),
            trip.end_address.clone(),
            trip.start_coord.clone(),
            trip.end_coord.clone(),
            trip.purpose.to_string(),
            trip.notes.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(trips.len())
}

/// Exports monthly summaries to CSV format.
///
/// # Arguments
///
/// * `summaries` - The monthly summary list, newest first
/// * `output` - Output file path (or stdout if `-`)
///
/// # Returns
///
/// Returns the number of records exported, or an error if export fails.
pub fn export_summary_csv(summaries: &[MonthlySummary], output: &Path) -> Result<usize> {
    let mut writer = writer_for(output)?;

    writer.write_record([
        "month",
        "business_miles",
        "personal_miles",
        "medical_miles",
        "charitable_miles",
        "other_miles",
        "total_miles",
    ])?;

    for summary in summaries {
        writer.write_record(&[
            summary.month.clone(),
            format!("{:.2}", summary.business_miles),
            format!("{:.2}", summary.personal_miles),
            format!("{:.2}", summary.medical_miles),
            format!("{:.2}", summary.charitable_miles),
            format!("{:.2}", summary.other_miles),
            format!("{:.2}", summary.total_miles),
        ])?;
    }

    writer.flush()?;
    Ok(summaries.len())
}
