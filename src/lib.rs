//! Facade crate for the CEP distance resolver.
//!
//! This crate re-exports the core domain types and, behind the `http`
//! feature, the HTTP adapters for ViaCEP, Nominatim and Google Distance
//! Matrix.

#![forbid(unsafe_code)]

pub use cep_distance_core::{
    Address, Coordinate, Distance, DistanceReport, DistanceResolver, DistanceResponse, ErrorBody,
    ErrorKind, GeocodeError, Geocoder, PostalCode, PostalDirectory, PrimaryUnavailable,
    Provenance, ResolutionError, ResolveDistance, RoutingProvider, Side, haversine, normalize,
    validate,
};

#[cfg(feature = "http")]
pub use cep_distance_data::{
    GoogleDistanceMatrix, HttpClientConfig, NominatimGeocoder, ProviderBuildError,
    RoutingCredential, ViaCepDirectory,
};
