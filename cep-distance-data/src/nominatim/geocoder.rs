//! HTTP [`Geocoder`] backed by Nominatim search.

use std::time::Duration;

use async_trait::async_trait;
use cep_distance_core::{Address, Coordinate, GeocodeError, Geocoder};
use log::debug;
use reqwest::Client;
use url::Url;

use super::dto::{SearchResult, first_match};
use crate::courtesy::{DEFAULT_COURTESY_DELAY, paced};
use crate::http::{HttpClientConfig, ProviderBuildError, TransportFailure, endpoint};

/// Public Nominatim endpoint.
pub const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Geocoder that queries `GET {base}/search?q=...&format=json&limit=1`.
///
/// Every request waits for the courtesy delay first. The public service
/// allows at most one request per second per client.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    search_endpoint: Url,
    timeout: Duration,
    courtesy_delay: Duration,
}

impl NominatimGeocoder {
    /// Create a geocoder for `base_url` with the default courtesy delay.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderBuildError`] if the base URL is not HTTP(S) or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, config: &HttpClientConfig) -> Result<Self, ProviderBuildError> {
        Ok(Self {
            client: config.build_client()?,
            search_endpoint: endpoint(base_url, "/search")?,
            timeout: config.timeout,
            courtesy_delay: DEFAULT_COURTESY_DELAY,
        })
    }

    /// Set the pause observed before each request.
    #[must_use]
    pub const fn with_courtesy_delay(mut self, delay: Duration) -> Self {
        self.courtesy_delay = delay;
        self
    }

    /// Build the search URL for a free-text `query`.
    #[must_use]
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.search_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", "1");
        url
    }

    async fn search(&self, url: Url) -> Result<Vec<SearchResult>, GeocodeError> {
        let display = url.to_string();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| TransportFailure::classify(&err, &display, self.timeout))?;

        response
            .json()
            .await
            .map_err(|err| GeocodeError::Malformed {
                message: err.to_string(),
            })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn locate(&self, address: &Address) -> Result<Coordinate, GeocodeError> {
        let query = address.free_text();
        let url = self.search_url(&query);
        debug!("geocoding {query:?} via {url}");

        let results = paced(self.courtesy_delay, self.search(url)).await?;
        first_match(&results, &query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn geocoder() -> NominatimGeocoder {
        NominatimGeocoder::new(DEFAULT_NOMINATIM_BASE_URL, &HttpClientConfig::default())
            .expect("geocoder")
    }

    #[rstest]
    fn search_url_encodes_the_address(geocoder: NominatimGeocoder) {
        let address = Address::new("Praça da Sé", "Sé", "São Paulo", "SP");

        let url = geocoder.search_url(&address.free_text());

        assert_eq!(url.path(), "/search");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_owned(), "Praça da Sé, Sé, São Paulo, SP, Brasil".to_owned()),
                ("format".to_owned(), "json".to_owned()),
                ("limit".to_owned(), "1".to_owned()),
            ]
        );
    }

    #[rstest]
    fn search_url_keeps_base_path() {
        let geocoder =
            NominatimGeocoder::new("http://localhost:8088/osm/", &HttpClientConfig::default())
                .expect("geocoder");

        let url = geocoder.search_url("Sé");

        assert_eq!(url.path(), "/osm/search");
    }

    #[rstest]
    fn defaults_to_courtesy_delay(geocoder: NominatimGeocoder) {
        assert_eq!(geocoder.courtesy_delay, DEFAULT_COURTESY_DELAY);
        let tuned = geocoder.with_courtesy_delay(Duration::from_millis(1100));
        assert_eq!(tuned.courtesy_delay, Duration::from_millis(1100));
    }

    #[rstest]
    #[tokio::test]
    async fn unreachable_geocoder_is_a_transport_error() {
        let geocoder = NominatimGeocoder::new(
            "http://127.0.0.1:9",
            &HttpClientConfig::default().with_timeout(Duration::from_secs(2)),
        )
        .expect("geocoder")
        .with_courtesy_delay(Duration::ZERO);
        let address = Address::new("", "", "Niterói", "RJ");

        let err = geocoder.locate(&address).await.expect_err("should fail");

        assert!(
            matches!(
                err,
                GeocodeError::Network { .. } | GeocodeError::Timeout { .. }
            ),
            "unexpected error: {err:?}"
        );
    }
}
