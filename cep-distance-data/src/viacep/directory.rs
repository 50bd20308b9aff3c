//! HTTP [`PostalDirectory`] backed by ViaCEP.

use std::time::Duration;

use async_trait::async_trait;
use cep_distance_core::{Address, AddressLookupError, PostalCode, PostalDirectory};
use log::debug;
use reqwest::Client;

use super::dto::ViaCepResponse;
use crate::http::{HttpClientConfig, ProviderBuildError, TransportFailure, parse_base_url};

/// Public ViaCEP endpoint.
pub const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br";

/// Postal directory that queries `GET {base}/ws/{cep}/json/`.
///
/// # Example
///
/// ```no_run
/// use cep_distance_data::{DEFAULT_VIACEP_BASE_URL, HttpClientConfig, ViaCepDirectory};
///
/// let directory = ViaCepDirectory::new(DEFAULT_VIACEP_BASE_URL, &HttpClientConfig::default())?;
/// # Ok::<(), cep_distance_data::ProviderBuildError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ViaCepDirectory {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ViaCepDirectory {
    /// Create a directory client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderBuildError`] if the base URL is not HTTP(S) or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, config: &HttpClientConfig) -> Result<Self, ProviderBuildError> {
        Ok(Self {
            client: config.build_client()?,
            base_url: parse_base_url(base_url)?,
            timeout: config.timeout,
        })
    }

    /// Build the lookup URL for `code`.
    #[must_use]
    pub fn lookup_url(&self, code: &PostalCode) -> String {
        format!("{}/ws/{}/json/", self.base_url, code.as_str())
    }
}

#[async_trait]
impl PostalDirectory for ViaCepDirectory {
    async fn lookup(&self, code: &PostalCode) -> Result<Address, AddressLookupError> {
        let url = self.lookup_url(code);
        debug!("looking up postal code {code} at {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| TransportFailure::classify(&err, &url, self.timeout))?;

        let body: ViaCepResponse =
            response
                .json()
                .await
                .map_err(|err| AddressLookupError::Malformed {
                    message: err.to_string(),
                })?;

        body.into_address(code.as_str())
    }
}
