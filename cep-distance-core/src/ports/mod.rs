//! Ports for the three external collaborators.
//!
//! The resolver only talks to the outside world through these traits. HTTP
//! implementations live in `cep-distance-data`; deterministic doubles live
//! in [`crate::test_support`].
//!
//! Every error type here keeps the upstream cause so it can be logged. The
//! resolver collapses them into the caller-facing
//! [`ResolutionError`](crate::ResolutionError) taxonomy.

mod directory;
mod geocoder;
mod routing;

pub use directory::{AddressLookupError, PostalDirectory};
pub use geocoder::{GeocodeError, Geocoder};
pub use routing::{PrimaryUnavailable, RoutingProvider};
