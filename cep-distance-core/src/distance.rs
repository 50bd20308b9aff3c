//! Resolved distances and the serialised response body.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a distance came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Driving distance reported by the routing provider.
    Routing,
    /// Great-circle distance between geocoded coordinates.
    Geodesic,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Routing => f.write_str("routing provider"),
            Self::Geodesic => f.write_str("geodesic fallback"),
        }
    }
}

/// A kilometre value at full precision together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    /// Distance in kilometres.
    pub kilometres: f64,
    /// How the distance was obtained.
    pub provenance: Provenance,
}

impl Distance {
    /// Kilometres rounded to two decimal places.
    #[must_use]
    pub fn rounded_km(&self) -> f64 {
        round_km(self.kilometres)
    }
}

/// Round a kilometre value to two decimal places.
///
/// Exact ties go to the even hundredth, so `0.125` becomes `0.12`.
///
/// ```
/// use cep_distance_core::round_km;
///
/// assert_eq!(round_km(12.3456), 12.35);
/// assert_eq!(round_km(358.625), 358.62);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "rounding to centi-kilometres needs float maths"
)]
pub fn round_km(kilometres: f64) -> f64 {
    (kilometres * 100.0).round_ties_even() / 100.0
}

/// Outcome of a successful resolution.
///
/// The postal codes are echoed exactly as the caller supplied them.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceReport {
    /// Origin postal code as supplied.
    pub origin_postal_code: String,
    /// Destination postal code as supplied.
    pub destination_postal_code: String,
    /// The resolved distance.
    pub distance: Distance,
}

/// Response body returned to callers.
///
/// Provenance is not part of the public contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceResponse {
    /// Origin postal code as supplied.
    pub origin_postal_code: String,
    /// Destination postal code as supplied.
    pub destination_postal_code: String,
    /// Distance in kilometres, rounded to two decimals.
    pub distance_km: f64,
}

impl From<DistanceReport> for DistanceResponse {
    fn from(report: DistanceReport) -> Self {
        let distance_km = report.distance.rounded_km();
        Self {
            origin_postal_code: report.origin_postal_code,
            destination_postal_code: report.destination_postal_code,
            distance_km,
        }
    }
}
