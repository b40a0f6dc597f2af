//! Reverse-geocoding backends and response handling.
//!
//! Two hosted backends are supported: the public Nominatim instance (no key,
//! strict one-request-per-second policy) and LocationIQ (keyed, 2 rps on the
//! free tier). When LocationIQ is requested without a key, or geocoding is
//! switched off, the backend degrades to `Disabled`: no network attempt is
//! ever made and every lookup takes the coordinate-fallback path.

use std::time::Duration;

use log::warn;
use serde::Deserialize;

use crate::config::{
    Config, GeocoderChoice, LOCATIONIQ_BASE_URL, LOCATIONIQ_MAX_IN_FLIGHT,
    LOCATIONIQ_PACING_INTERVAL, NOMINATIM_BASE_URL, NOMINATIM_MAX_IN_FLIGHT,
    NOMINATIM_PACING_INTERVAL,
};

/// A configured reverse-geocoding backend.
#[derive(Debug, Clone)]
pub enum GeocoderBackend {
    /// Public Nominatim instance (or a self-hosted one via URL override)
    Nominatim {
        /// Endpoint base, no trailing slash
        base_url: String,
    },
    /// LocationIQ with an API key
    LocationIq {
        /// Endpoint base, no trailing slash
        base_url: String,
        /// Account API key, sent as a query parameter
        api_key: String,
    },
    /// Remote lookups disabled; every coordinate falls back
    Disabled,
}

impl GeocoderBackend {
    /// Selects a backend from the configuration.
    ///
    /// `Auto` prefers LocationIQ when an API key is present. Requesting
    /// LocationIQ without a key logs a warning and disables remote lookups
    /// rather than failing: the run still completes with coordinate
    /// fallbacks.
    pub fn from_config(config: &Config) -> Self {
        let base = |default: &str| {
            config
                .geocoder_url
                .clone()
                .unwrap_or_else(|| default.to_string())
        };
        match config.geocoder {
            GeocoderChoice::Off => GeocoderBackend::Disabled,
            GeocoderChoice::Nominatim => GeocoderBackend::Nominatim {
                base_url: base(NOMINATIM_BASE_URL),
            },
            GeocoderChoice::Locationiq => match &config.api_key {
                Some(api_key) => GeocoderBackend::LocationIq {
                    base_url: base(LOCATIONIQ_BASE_URL),
                    api_key: api_key.clone(),
                },
                None => {
                    warn!("LocationIQ selected but no API key configured; addresses will fall back to coordinates");
                    GeocoderBackend::Disabled
                }
            },
            GeocoderChoice::Auto => match &config.api_key {
                Some(api_key) => GeocoderBackend::LocationIq {
                    base_url: base(LOCATIONIQ_BASE_URL),
                    api_key: api_key.clone(),
                },
                None => GeocoderBackend::Nominatim {
                    base_url: base(NOMINATIM_BASE_URL),
                },
            },
        }
    }

    /// Builds the reverse-lookup request URL, or `None` when disabled.
    pub fn reverse_url(&self, lat: f64, lon: f64) -> Option<String> {
        match self {
            GeocoderBackend::Nominatim { base_url } => Some(format!(
                "{base_url}/reverse?format=json&lat={lat}&lon={lon}"
            )),
            GeocoderBackend::LocationIq { base_url, api_key } => Some(format!(
                "{base_url}/v1/reverse?key={api_key}&lat={lat}&lon={lon}&format=json"
            )),
            GeocoderBackend::Disabled => None,
        }
    }

    /// Minimum interval between successive request dispatches.
    pub fn pacing_interval(&self) -> Duration {
        match self {
            GeocoderBackend::Nominatim { .. } => NOMINATIM_PACING_INTERVAL,
            GeocoderBackend::LocationIq { .. } => LOCATIONIQ_PACING_INTERVAL,
            GeocoderBackend::Disabled => Duration::ZERO,
        }
    }

    /// Maximum simultaneous in-flight lookups.
    pub fn max_in_flight(&self) -> usize {
        match self {
            GeocoderBackend::Nominatim { .. } => NOMINATIM_MAX_IN_FLIGHT,
            GeocoderBackend::LocationIq { .. } => LOCATIONIQ_MAX_IN_FLIGHT,
            GeocoderBackend::Disabled => 1,
        }
    }

    /// Short backend name for logging.
    pub fn label(&self) -> &'static str {
        match self {
            GeocoderBackend::Nominatim { .. } => "nominatim",
            GeocoderBackend::LocationIq { .. } => "locationiq",
            GeocoderBackend::Disabled => "disabled",
        }
    }
}

/// Reverse-geocoding response body (both backends share this shape).
#[derive(Debug, Default, Deserialize)]
pub struct ReverseGeocodeResponse {
    /// Structured address breakdown, when the provider has one
    #[serde(default)]
    pub address: Option<AddressDetails>,
    /// Full formatted address line
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Structured address fields of a reverse-geocoding response.
#[derive(Debug, Default, Deserialize)]
pub struct AddressDetails {
    /// House number, when resolvable
    #[serde(default)]
    pub house_number: Option<String>,
    /// Street name
    #[serde(default)]
    pub road: Option<String>,
    /// City, when the place is inside one
    #[serde(default)]
    pub city: Option<String>,
    /// Town, for smaller places
    #[serde(default)]
    pub town: Option<String>,
    /// Village, for the smallest places
    #[serde(default)]
    pub village: Option<String>,
    /// State or province
    #[serde(default)]
    pub state: Option<String>,
}

impl ReverseGeocodeResponse {
    /// Extracts a compact display address.
    ///
    /// Prefers house-number + road (or road alone), then appends the most
    /// specific locality (city, town, or village) and the state, joined with
    /// commas. Falls back to the first three comma-separated segments of the
    /// provider's full display name. Returns `None` when neither yields
    /// anything usable.
    pub fn compact_address(&self) -> Option<String> {
        if let Some(address) = &self.address {
            let mut parts: Vec<String> = Vec::new();
            match (&address.house_number, &address.road) {
                (Some(number), Some(road)) => parts.push(format!("{number} {road}")),
                (None, Some(road)) => parts.push(road.clone()),
                _ => {}
            }
            if let Some(locality) = address
                .city
                .as_ref()
                .or(address.town.as_ref())
                .or(address.village.as_ref())
            {
                parts.push(locality.clone());
            }
            if let Some(state) = &address.state {
                parts.push(state.clone());
            }
            if !parts.is_empty() {
                return Some(parts.join(", "));
            }
        }

        let display = self.display_name.as_deref()?.trim();
        if display.is_empty() {
            return None;
        }
        let head = display
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .take(3)
            .collect::<Vec<_>>()
            .join(", ");
        if head.is_empty() {
            None
        } else {
            Some(head)
        }
    }
}
