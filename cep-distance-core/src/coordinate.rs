//! WGS84 coordinates produced by geocoding.

use geo::Point;
use thiserror::Error;

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was NaN, infinite, or outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),
    /// Longitude was NaN, infinite, or outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

/// A latitude/longitude pair in decimal degrees.
///
/// Stored as a [`geo::Point`] with `x` as longitude and `y` as latitude.
///
/// # Examples
///
/// ```
/// use cep_distance_core::Coordinate;
///
/// let rio = Coordinate::new(-22.9068, -43.1729)?;
/// assert_eq!(rio.latitude(), -22.9068);
/// assert_eq!(rio.longitude(), -43.1729);
/// # Ok::<(), cep_distance_core::CoordinateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate(Point<f64>);

impl Coordinate {
    /// Validate and construct a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is not finite or is
    /// out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Self(Point::new(longitude, latitude)))
    }

    /// Latitude in degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.0.y()
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.0.x()
    }

    /// Great-circle distance to `other` in kilometres.
    ///
    /// See [`crate::haversine::distance_km`].
    #[must_use]
    pub fn haversine_km(&self, other: &Self) -> f64 {
        crate::haversine::distance_km(
            self.latitude(),
            self.longitude(),
            other.latitude(),
            other.longitude(),
        )
    }
}
