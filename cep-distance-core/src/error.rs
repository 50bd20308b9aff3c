//! Failures reported by [`crate::DistanceResolver`].
//!
//! Every variant maps to an [`ErrorKind`] and an HTTP-equivalent status:
//! caller mistakes are 400, downstream failures are 500. Routing-provider
//! failures never appear here; they only trigger the geodesic fallback.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which input a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The origin postal code.
    Origin,
    /// The destination postal code.
    Destination,
}

impl Side {
    /// Lower-case name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure taxonomy exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A postal code failed format validation.
    InvalidPostalCode,
    /// The postal directory does not know a postal code.
    PostalCodeNotFound,
    /// Geocoding failed during the fallback.
    CoordinateResolutionFailed,
    /// No method produced a distance.
    TotalResolutionFailure,
}

/// A failed distance resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The postal code on `side` is not a CEP.
    #[error("invalid {side} postal code: use the format NNNNN-NNN or NNNNNNNN")]
    InvalidPostalCode {
        /// Offending input.
        side: Side,
    },
    /// The postal directory did not resolve the code on `side`.
    #[error("{side} postal code not found: check that the postal code is correct")]
    PostalCodeNotFound {
        /// Offending input.
        side: Side,
    },
    /// The geocoder could not locate the address on `side`.
    #[error("could not resolve coordinates for the {side} postal code")]
    CoordinateResolutionFailed {
        /// Offending input.
        side: Side,
    },
    /// Every resolution method was exhausted.
    #[error("could not compute the distance with any available method")]
    TotalResolutionFailure,
}

impl ResolutionError {
    /// The taxonomy kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPostalCode { .. } => ErrorKind::InvalidPostalCode,
            Self::PostalCodeNotFound { .. } => ErrorKind::PostalCodeNotFound,
            Self::CoordinateResolutionFailed { .. } => ErrorKind::CoordinateResolutionFailed,
            Self::TotalResolutionFailure => ErrorKind::TotalResolutionFailure,
        }
    }

    /// HTTP-equivalent status code: 400 for caller errors, 500 otherwise.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        if self.is_caller_error() { 400 } else { 500 }
    }

    /// Whether the caller can fix the failure by changing the input.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidPostalCode | ErrorKind::PostalCodeNotFound
        )
    }
}

/// Structured error body, `{ "error": <message> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

impl From<&ResolutionError> for ErrorBody {
    fn from(err: &ResolutionError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ResolutionError::InvalidPostalCode { side: Side::Origin }, 400)]
    #[case(ResolutionError::PostalCodeNotFound { side: Side::Destination }, 400)]
    #[case(ResolutionError::CoordinateResolutionFailed { side: Side::Origin }, 500)]
    #[case(ResolutionError::TotalResolutionFailure, 500)]
    fn maps_kinds_to_status(#[case] err: ResolutionError, #[case] status: u16) {
        assert_eq!(err.http_status(), status);
    }

    #[rstest]
    fn messages_name_the_side() {
        let err = ResolutionError::PostalCodeNotFound {
            side: Side::Destination,
        };
        assert_eq!(
            err.to_string(),
            "destination postal code not found: check that the postal code is correct"
        );
    }

    #[rstest]
    fn error_body_wraps_message() {
        let err = ResolutionError::InvalidPostalCode { side: Side::Origin };
        let body = ErrorBody::from(&err);
        let json = serde_json::to_string(&body).expect("serialise body");
        assert_eq!(
            json,
            r#"{"error":"invalid origin postal code: use the format NNNNN-NNN or NNNNNNNN"}"#
        );
    }
}
