//! Routing port: driving distance between two free-text addresses.

use async_trait::async_trait;
use thiserror::Error;

/// The routing provider could not supply a distance.
///
/// Every variant means the same thing to the resolver: use the geodesic
/// fallback. The cause is kept for logging only and is never shown to
/// callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimaryUnavailable {
    /// No usable credential was configured.
    #[error("routing provider credential is not configured")]
    NotConfigured,
    /// The request exceeded its timeout.
    #[error("routing request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The provider answered with a non-success HTTP status.
    #[error("routing provider returned HTTP {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },
    /// The request failed before a response arrived.
    #[error("routing request failed: {message}")]
    Network {
        /// Transport error description.
        message: String,
    },
    /// The top-level response status was not `OK`.
    #[error("routing provider status {status}: {message}")]
    Status {
        /// Reported status.
        status: String,
        /// Provider error message, possibly empty.
        message: String,
    },
    /// The response held no rows or elements.
    #[error("routing provider returned no route")]
    NoRoute,
    /// The element status was not `OK`.
    #[error("routing element status {status}")]
    ElementStatus {
        /// Reported element status.
        status: String,
    },
    /// An expected field was missing or invalid.
    #[error("routing response was malformed: {message}")]
    Malformed {
        /// Decoding error description.
        message: String,
    },
}

/// Fetch a driving distance between two addresses.
///
/// Implementations never surface any other error: configuration problems,
/// transport failures and malformed responses all become
/// [`PrimaryUnavailable`].
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Driving distance in kilometres from `origin` to `destination`.
    async fn driving_distance_km(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<f64, PrimaryUnavailable>;
}
