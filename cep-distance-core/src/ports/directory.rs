//! Postal directory port: postal code to street address.

use async_trait::async_trait;
use thiserror::Error;

use crate::{Address, PostalCode};

/// Reasons a directory lookup produced no address.
///
/// The resolver reports all of them as
/// [`ResolutionError::PostalCodeNotFound`](crate::ResolutionError::PostalCodeNotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressLookupError {
    /// The directory answered with its explicit "not found" marker.
    #[error("postal code {code} is not registered")]
    NotRegistered {
        /// Normalised code that was looked up.
        code: String,
    },
    /// The request exceeded its timeout.
    #[error("postal directory request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The directory answered with a non-success HTTP status.
    #[error("postal directory returned HTTP {status} for {url}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The request failed before a response arrived.
    #[error("postal directory request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The body could not be decoded into an address.
    #[error("postal directory response was malformed: {message}")]
    Malformed {
        /// Decoding error description.
        message: String,
    },
}

/// Resolve a normalised postal code into an [`Address`].
///
/// Implementations make at most one outbound call per lookup and never
/// retry. Optional address parts missing upstream become empty strings.
#[async_trait]
pub trait PostalDirectory: Send + Sync {
    /// Look up `code`.
    async fn lookup(&self, code: &PostalCode) -> Result<Address, AddressLookupError>;
}
