//! Deterministic collaborators for unit and behaviour tests.
//!
//! Each stub counts its calls through a shared counter, so a clone handed to
//! a [`DistanceResolver`](crate::DistanceResolver) still reports calls to
//! the test that kept the original.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{
    AddressLookupError, GeocodeError, Geocoder, PostalDirectory, PrimaryUnavailable,
    RoutingProvider,
};
use crate::{Address, Coordinate, PostalCode};

/// In-memory [`PostalDirectory`] keyed by normalised postal code.
///
/// Unknown codes answer [`AddressLookupError::NotRegistered`].
#[derive(Debug, Clone, Default)]
pub struct StubDirectory {
    entries: HashMap<String, Result<Address, AddressLookupError>>,
    calls: Arc<AtomicUsize>,
}

impl StubDirectory {
    /// Register `address` under the eight-digit `code`.
    #[must_use]
    pub fn with_address(mut self, code: &str, address: Address) -> Self {
        self.entries.insert(code.to_owned(), Ok(address));
        self
    }

    /// Make lookups of `code` fail with `error`.
    #[must_use]
    pub fn with_failure(mut self, code: &str, error: AddressLookupError) -> Self {
        self.entries.insert(code.to_owned(), Err(error));
        self
    }

    /// Number of lookups made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostalDirectory for StubDirectory {
    async fn lookup(&self, code: &PostalCode) -> Result<Address, AddressLookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries.get(code.as_str()).cloned().unwrap_or_else(|| {
            Err(AddressLookupError::NotRegistered {
                code: code.to_string(),
            })
        })
    }
}

/// In-memory [`Geocoder`] keyed by [`Address::free_text`].
///
/// Unknown addresses answer [`GeocodeError::NoMatch`].
#[derive(Debug, Clone, Default)]
pub struct StubGeocoder {
    entries: HashMap<String, Result<Coordinate, GeocodeError>>,
    calls: Arc<AtomicUsize>,
}

impl StubGeocoder {
    /// Locate `address` at the given position.
    ///
    /// Out-of-range positions are registered as
    /// [`GeocodeError::Malformed`].
    #[must_use]
    pub fn with_coordinate(mut self, address: &Address, latitude: f64, longitude: f64) -> Self {
        let outcome = Coordinate::new(latitude, longitude).map_err(|err| GeocodeError::Malformed {
            message: err.to_string(),
        });
        self.entries.insert(address.free_text(), outcome);
        self
    }

    /// Make geocoding of `address` fail with `error`.
    #[must_use]
    pub fn with_failure(mut self, address: &Address, error: GeocodeError) -> Self {
        self.entries.insert(address.free_text(), Err(error));
        self
    }

    /// Number of geocoding requests made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn locate(&self, address: &Address) -> Result<Coordinate, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let query = address.free_text();
        match self.entries.get(&query) {
            Some(outcome) => outcome.clone(),
            None => Err(GeocodeError::NoMatch { query }),
        }
    }
}

/// [`RoutingProvider`] returning a fixed outcome.
#[derive(Debug, Clone)]
pub struct StubRouting {
    response: Result<f64, PrimaryUnavailable>,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<(String, String)>>>,
}

impl StubRouting {
    /// Answer every request with `kilometres`.
    #[must_use]
    pub fn with_distance_km(kilometres: f64) -> Self {
        Self::with_response(Ok(kilometres))
    }

    /// Fail every request with `cause`.
    #[must_use]
    pub fn unavailable(cause: PrimaryUnavailable) -> Self {
        Self::with_response(Err(cause))
    }

    fn with_response(response: Result<f64, PrimaryUnavailable>) -> Self {
        Self {
            response,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Number of distance requests made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent `(origin, destination)` pair received.
    #[must_use]
    pub fn last_request(&self) -> Option<(String, String)> {
        self.last_request
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl RoutingProvider for StubRouting {
    async fn driving_distance_km(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<f64, PrimaryUnavailable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some((origin.to_owned(), destination.to_owned()));
        }
        self.response.clone()
    }
}
