//! Google Distance Matrix routing adapter.
//!
//! See: <https://developers.google.com/maps/documentation/distance-matrix>

mod credential;
mod dto;
mod provider;

pub use credential::{PLACEHOLDER_API_KEY, RoutingCredential};
pub use dto::{DistanceMatrixResponse, Element, ElementDistance, Row};
pub use provider::{DEFAULT_DISTANCE_MATRIX_BASE_URL, GoogleDistanceMatrix};
