//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::geocode::stats::{AddressSource, GeocodingStats};

/// Prints the end-of-run geocoding statistics to the log.
///
/// Shows the batch dimensions (address slots, distinct coordinates) followed
/// by one line per address source with a non-zero count.
pub fn print_geocoding_statistics(stats: &GeocodingStats) {
    let snapshot = stats.snapshot();

    info!(
        "Geocoding: {} address slots across {} distinct coordinates",
        snapshot.total_addresses, snapshot.unique_coordinates
    );
    for source in AddressSource::iter() {
        let count = stats.count(source);
        if count > 0 {
            info!("   {}: {}", source.as_str(), count);
        }
    }
    if snapshot.fallbacks > 0 {
        info!(
            "   {} lookup{} degraded to formatted coordinates - check geocoder configuration",
            snapshot.fallbacks,
            if snapshot.fallbacks == 1 { "" } else { "s" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_handles_empty_stats() {
        // Printing must not panic on a fresh tracker
        let stats = GeocodingStats::new();
        print_geocoding_statistics(&stats);
    }

    #[test]
    fn test_print_handles_populated_stats() {
        let stats = GeocodingStats::new();
        stats.set_batch_totals(6, 4);
        stats.record(AddressSource::Api);
        stats.record(AddressSource::MemoryCache);
        stats.record(AddressSource::Fallback);
        print_geocoding_statistics(&stats);
    }
}
