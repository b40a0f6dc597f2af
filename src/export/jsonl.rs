//! JSONL export functionality.
//!
//! Writes one JSON object per trip, one per line, for downstream tooling.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::NormalizedTrip;

/// Exports trips to JSONL format (one JSON object per line).
///
/// # Arguments
///
/// * `trips` - The enriched trip list
/// * `output` - Output file path (or stdout if `-`)
///
/// # Returns
///
/// Returns the number of records exported, or an error if export fails.
pub fn export_trips_jsonl(trips: &[NormalizedTrip], output: &Path) -> Result<usize> {
    let mut writer: Box<dyn Write> = if output.as_os_str() == "-" {
        Box::new(io::stdout())
    } else {
        let file = std::fs::File::create(output)
            .with_context(|| format!("Failed to create output file: {}", output.display()))?;
        Box::new(BufWriter::new(file))
    };

    for trip in trips {
        let line = serde_json::to_string(trip).context("Failed to serialize trip")?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(trips.len())
}
