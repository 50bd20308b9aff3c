//! Nominatim (OpenStreetMap) geocoder adapter.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Search/>

mod dto;
mod geocoder;

pub use dto::SearchResult;
pub use geocoder::{DEFAULT_NOMINATIM_BASE_URL, NominatimGeocoder};
