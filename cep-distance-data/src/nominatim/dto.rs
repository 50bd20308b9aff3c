//! Nominatim search response types.

use cep_distance_core::{Coordinate, GeocodeError};
use serde::Deserialize;

/// One entry of the `/search?format=json` array.
///
/// Nominatim encodes coordinates as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Latitude in decimal degrees.
    pub lat: String,
    /// Longitude in decimal degrees.
    pub lon: String,
    /// Human-readable name of the match.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SearchResult {
    /// Parse the coordinate strings.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Malformed`] if either value is not a number or
    /// is out of range.
    pub fn coordinate(&self) -> Result<Coordinate, GeocodeError> {
        let latitude = parse_degrees("lat", &self.lat)?;
        let longitude = parse_degrees("lon", &self.lon)?;
        Coordinate::new(latitude, longitude).map_err(|err| GeocodeError::Malformed {
            message: err.to_string(),
        })
    }
}

fn parse_degrees(field: &str, raw: &str) -> Result<f64, GeocodeError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|err| GeocodeError::Malformed {
            message: format!("{field} {raw:?}: {err}"),
        })
}

/// Take the first match of a search response.
///
/// # Errors
///
/// Returns [`GeocodeError::NoMatch`] for an empty array, otherwise the
/// errors of [`SearchResult::coordinate`].
pub(crate) fn first_match(
    results: &[SearchResult],
    query: &str,
) -> Result<Coordinate, GeocodeError> {
    results.first().map_or_else(
        || {
            Err(GeocodeError::NoMatch {
                query: query.to_owned(),
            })
        },
        SearchResult::coordinate,
    )
}
