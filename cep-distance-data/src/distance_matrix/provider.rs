//! HTTP [`RoutingProvider`] backed by the Google Distance Matrix API.

use std::time::Duration;

use async_trait::async_trait;
use cep_distance_core::{PrimaryUnavailable, RoutingProvider};
use log::debug;
use reqwest::Client;
use url::Url;

use super::credential::RoutingCredential;
use super::dto::DistanceMatrixResponse;
use crate::http::{HttpClientConfig, ProviderBuildError, TransportFailure, endpoint};

/// Public Google Maps endpoint.
pub const DEFAULT_DISTANCE_MATRIX_BASE_URL: &str = "https://maps.googleapis.com";

const DISTANCE_MATRIX_PATH: &str = "/maps/api/distancematrix/json";
const REDACTED: &str = "REDACTED";

/// Driving distances from the Distance Matrix API.
///
/// Without a credential every request answers
/// [`PrimaryUnavailable::NotConfigured`] and nothing is sent.
#[derive(Debug, Clone)]
pub struct GoogleDistanceMatrix {
    client: Client,
    endpoint: Url,
    credential: Option<RoutingCredential>,
    timeout: Duration,
}

impl GoogleDistanceMatrix {
    /// Create a provider for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderBuildError`] if the base URL is not HTTP(S) or the
    /// HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        config: &HttpClientConfig,
        credential: Option<RoutingCredential>,
    ) -> Result<Self, ProviderBuildError> {
        Ok(Self {
            client: config.build_client()?,
            endpoint: endpoint(base_url, DISTANCE_MATRIX_PATH)?,
            credential,
            timeout: config.timeout,
        })
    }

    /// Whether a credential was supplied.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.credential.is_some()
    }

    fn request_url(&self, key: &str, origin: &str, destination: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("origins", origin)
            .append_pair("destinations", destination)
            .append_pair("key", key)
            .append_pair("mode", "driving")
            .append_pair("language", "pt-BR")
            .append_pair("units", "metric");
        url
    }
}

/// Render `url` with the `key` parameter masked.
fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let shown = if name == "key" {
                REDACTED.to_owned()
            } else {
                value.into_owned()
            };
            (name.into_owned(), shown)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

#[async_trait]
impl RoutingProvider for GoogleDistanceMatrix {
    async fn driving_distance_km(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<f64, PrimaryUnavailable> {
        let credential = self
            .credential
            .as_ref()
            .ok_or(PrimaryUnavailable::NotConfigured)?;
        let url = self.request_url(credential.expose(), origin, destination);
        let display = redacted(&url);
        debug!("requesting driving distance via {display}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            // reqwest errors embed the full URL; only the redacted form may leave here.
            .map_err(|err| {
                TransportFailure::classify(&err.without_url(), &display, self.timeout)
            })?;

        let body: DistanceMatrixResponse =
            response
                .json()
                .await
                .map_err(|err| PrimaryUnavailable::Malformed {
                    message: err.without_url().to_string(),
                })?;

        body.into_kilometres()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn credential() -> RoutingCredential {
        RoutingCredential::from_setting(Some("secret-key".to_owned())).expect("credential")
    }

    #[rstest]
    fn request_url_carries_all_parameters(credential: RoutingCredential) {
        let provider = GoogleDistanceMatrix::new(
            DEFAULT_DISTANCE_MATRIX_BASE_URL,
            &HttpClientConfig::default(),
            Some(credential),
        )
        .expect("provider");

        let url = provider.request_url("secret-key", "Origem, RJ, Brasil", "Destino, SP, Brasil");

        assert_eq!(url.path(), "/maps/api/distancematrix/json");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        let expected: Vec<(String, String)> = [
            ("origins", "Origem, RJ, Brasil"),
            ("destinations", "Destino, SP, Brasil"),
            ("key", "secret-key"),
            ("mode", "driving"),
            ("language", "pt-BR"),
            ("units", "metric"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect();
        assert_eq!(pairs, expected);
    }

    #[rstest]
    fn redaction_hides_only_the_key(credential: RoutingCredential) {
        let provider = GoogleDistanceMatrix::new(
            DEFAULT_DISTANCE_MATRIX_BASE_URL,
            &HttpClientConfig::default(),
            Some(credential),
        )
        .expect("provider");
        let url = provider.request_url("secret-key", "a", "b");

        let shown = redacted(&url);

        assert!(!shown.contains("secret-key"));
        assert!(shown.contains("key=REDACTED"));
        assert!(shown.contains("origins=a"));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_credential_short_circuits() {
        // The unroutable base would fail any request that was actually sent.
        let provider =
            GoogleDistanceMatrix::new("http://127.0.0.1:9", &HttpClientConfig::default(), None)
                .expect("provider");

        assert!(!provider.is_configured());
        assert_eq!(
            provider.driving_distance_km("a", "b").await,
            Err(PrimaryUnavailable::NotConfigured)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn transport_failure_does_not_leak_the_key(credential: RoutingCredential) {
        let provider = GoogleDistanceMatrix::new(
            "http://127.0.0.1:9",
            &HttpClientConfig::default().with_timeout(Duration::from_secs(2)),
            Some(credential),
        )
        .expect("provider");

        let err = provider
            .driving_distance_km("a", "b")
            .await
            .expect_err("should fail");

        assert!(
            matches!(
                err,
                PrimaryUnavailable::Network { .. } | PrimaryUnavailable::Timeout { .. }
            ),
            "unexpected error: {err:?}"
        );
        assert!(!err.to_string().contains("secret-key"));
    }
}
