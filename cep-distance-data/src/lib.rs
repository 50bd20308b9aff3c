//! HTTP adapters for the `cep-distance-core` ports.
//!
//! - [`ViaCepDirectory`] resolves postal codes to addresses.
//! - [`NominatimGeocoder`] geocodes addresses, pausing before each request.
//! - [`GoogleDistanceMatrix`] asks for driving distances when a
//!   [`RoutingCredential`] is configured.
//!
//! All adapters share an [`HttpClientConfig`] for timeout and user agent.
//! They are async and expect to run inside a Tokio runtime.

#![forbid(unsafe_code)]

mod courtesy;
mod distance_matrix;
mod http;
mod nominatim;
mod viacep;

pub use courtesy::{DEFAULT_COURTESY_DELAY, paced};
pub use distance_matrix::{
    DEFAULT_DISTANCE_MATRIX_BASE_URL, DistanceMatrixResponse, Element, ElementDistance,
    GoogleDistanceMatrix, PLACEHOLDER_API_KEY, RoutingCredential, Row,
};
pub use http::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, HttpClientConfig, ProviderBuildError};
pub use nominatim::{DEFAULT_NOMINATIM_BASE_URL, NominatimGeocoder, SearchResult};
pub use viacep::{DEFAULT_VIACEP_BASE_URL, ViaCepDirectory, ViaCepResponse};
