//! Geocoding port: address to coordinates.

use async_trait::async_trait;
use thiserror::Error;

use crate::{Address, Coordinate};

/// Reasons geocoding produced no coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The provider returned no candidate for the query.
    #[error("no location matched {query:?}")]
    NoMatch {
        /// Free-text query that was sent.
        query: String,
    },
    /// The request exceeded its timeout.
    #[error("geocoding request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The provider answered with a non-success HTTP status.
    #[error("geocoder returned HTTP {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },
    /// The request failed before a response arrived.
    #[error("geocoding request failed: {message}")]
    Network {
        /// Transport error description.
        message: String,
    },
    /// The body could not be decoded into a coordinate.
    #[error("geocoder response was malformed: {message}")]
    Malformed {
        /// Decoding error description.
        message: String,
    },
}

/// Resolve an [`Address`] into a [`Coordinate`].
///
/// Implementations that call a shared public service must wait out their
/// courtesy delay before every request. The wait must not hold a lock.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Locate `address`.
    async fn locate(&self, address: &Address) -> Result<Coordinate, GeocodeError>;
}
