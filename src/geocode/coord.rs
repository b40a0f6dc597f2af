//! Coordinate parsing, normalization, and fallback formatting.
//!
//! Coordinates arrive as textual `geo:lat,lon` pairs (the exact shape varies
//! between export revisions, so the lat/lon pair is located by pattern rather
//! than by prefix). All three functions here are pure and total: unparseable
//! input is passed through, never rejected.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::{COORD_CACHE_PRECISION, COORD_DISPLAY_PRECISION};

/// Matches the latitude/longitude pair inside a coordinate string.
fn lat_lon_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(-?\d+\.?\d*)[,\s]+(-?\d+\.?\d*)").expect("lat/lon pattern is valid")
    })
}

/// Extracts `(lat, lon)` from a coordinate string, if present.
pub fn parse_lat_lon(coord: &str) -> Option<(f64, f64)> {
    let captures = lat_lon_regex().captures(coord)?;
    let lat = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let lon = captures.get(2)?.as_str().parse::<f64>().ok()?;
    Some((lat, lon))
}

/// Rounds both components of a coordinate to the cache precision, in place.
///
/// The rest of the string (prefix, separator) is preserved, so two encodings
/// of nearby points collapse to the same cache key while still looking like
/// the original format. Idempotent; input without a recognizable lat/lon
/// pair is returned unchanged.
pub fn normalize_coord(coord: &str) -> String {
    let Some(captures) = lat_lon_regex().captures(coord) else {
        return coord.to_string();
    };
    let (Some(lat_match), Some(lon_match)) = (captures.get(1), captures.get(2)) else {
        return coord.to_string();
    };
    let (Ok(lat), Ok(lon)) = (
        lat_match.as_str().parse::<f64>(),
        lon_match.as_str().parse::<f64>(),
    ) else {
        return coord.to_string();
    };

    let mut normalized = String::with_capacity(coord.len());
    normalized.push_str(&coord[..lat_match.start()]);
    normalized.push_str(&format!("{lat:.prec$}", prec = COORD_CACHE_PRECISION));
    normalized.push_str(&coord[lat_match.end()..lon_match.start()]);
    normalized.push_str(&format!("{lon:.prec$}", prec = COORD_CACHE_PRECISION));
    normalized.push_str(&coord[lon_match.end()..]);
    normalized
}

/// Renders a coordinate as a readable `"lat, lon"` address fallback.
///
/// Used whenever no better address is available. A string without a
/// recognizable lat/lon pair is returned unchanged.
pub fn format_coord_fallback(coord: &str) -> String {
    match parse_lat_lon(coord) {
        Some((lat, lon)) => {
            format!("{lat:.prec$}, {lon:.prec$}", prec = COORD_DISPLAY_PRECISION)
        }
        None => coord.to_string(),
    }
}
