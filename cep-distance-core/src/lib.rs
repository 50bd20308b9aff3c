//! Core domain for resolving distances between Brazilian postal codes.
//!
//! The crate validates and normalises CEPs, defines the ports through which
//! the postal directory, geocoder and routing provider are reached, and
//! composes them in [`DistanceResolver`]. When the routing provider cannot
//! answer, the resolver geocodes both addresses and falls back to the
//! [`haversine`] great-circle distance.
//!
//! The crate does not pick an async runtime; concrete adapters and the
//! runtime live in `cep-distance-data` and `cep-distance-cli`.

#![forbid(unsafe_code)]

mod address;
mod coordinate;
mod distance;
mod error;
pub mod haversine;
pub mod ports;
mod postal_code;
mod resolver;

#[doc(hidden)]
pub mod test_support;

pub use address::{Address, COUNTRY};
pub use coordinate::{Coordinate, CoordinateError};
pub use distance::{Distance, DistanceReport, DistanceResponse, Provenance, round_km};
pub use error::{ErrorBody, ErrorKind, ResolutionError, Side};
pub use ports::{
    AddressLookupError, GeocodeError, Geocoder, PostalDirectory, PrimaryUnavailable,
    RoutingProvider,
};
pub use postal_code::{InvalidPostalCode, POSTAL_CODE_DIGITS, PostalCode, normalize, validate};
pub use resolver::{DistanceResolver, ResolveDistance};
