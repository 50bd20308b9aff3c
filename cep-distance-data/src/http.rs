//! Shared HTTP client settings and transport error classification.

use std::time::Duration;

use cep_distance_core::{AddressLookupError, GeocodeError, PrimaryUnavailable};
use reqwest::Client;
use thiserror::Error;
use url::Url;

/// Default user agent for outbound requests.
///
/// Nominatim's usage policy requires an identifying user agent.
pub const DEFAULT_USER_AGENT: &str = "cep-distance/0.1";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Error type for adapter construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The configured base URL is not an absolute HTTP(S) URL.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Client settings shared by every adapter.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout duration, applied to connect and to the whole request.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpClientConfig {
    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub(crate) fn build_client(&self) -> Result<Client, ProviderBuildError> {
        Client::builder()
            .user_agent(&self.user_agent)
            .connect_timeout(self.timeout)
            .timeout(self.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)
    }
}

/// Parse `raw` as an absolute HTTP(S) base URL and strip trailing slashes.
pub(crate) fn parse_base_url(raw: &str) -> Result<String, ProviderBuildError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|err| ProviderBuildError::InvalidBaseUrl {
        url: raw.to_owned(),
        reason: err.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ProviderBuildError::InvalidBaseUrl {
            url: raw.to_owned(),
            reason: format!("unsupported scheme {:?}", parsed.scheme()),
        });
    }
    Ok(trimmed.to_owned())
}

/// Parse `{base_url}{path}` as an endpoint URL.
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url, ProviderBuildError> {
    let base = parse_base_url(base_url)?;
    let joined = format!("{base}{path}");
    Url::parse(&joined).map_err(|err| ProviderBuildError::InvalidBaseUrl {
        url: base_url.to_owned(),
        reason: err.to_string(),
    })
}

/// A request that failed before a usable body arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TransportFailure {
    Timeout { url: String, timeout_secs: u64 },
    Http { url: String, status: u16 },
    Network { url: String, message: String },
}

impl TransportFailure {
    /// Classify a reqwest error raised while requesting `url`.
    pub(crate) fn classify(error: &reqwest::Error, url: &str, timeout: Duration) -> Self {
        if error.is_timeout() {
            return Self::Timeout {
                url: url.to_owned(),
                timeout_secs: timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return Self::Http {
                url: url.to_owned(),
                status: status.as_u16(),
            };
        }

        Self::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

impl From<TransportFailure> for AddressLookupError {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Timeout { url, timeout_secs } => Self::Timeout { url, timeout_secs },
            TransportFailure::Http { url, status } => Self::Http { url, status },
            TransportFailure::Network { url, message } => Self::Network { url, message },
        }
    }
}

impl From<TransportFailure> for GeocodeError {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Timeout { timeout_secs, .. } => Self::Timeout { timeout_secs },
            TransportFailure::Http { status, .. } => Self::Http { status },
            TransportFailure::Network { message, .. } => Self::Network { message },
        }
    }
}

impl From<TransportFailure> for PrimaryUnavailable {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Timeout { timeout_secs, .. } => Self::Timeout { timeout_secs },
            TransportFailure::Http { status, .. } => Self::Http { status },
            TransportFailure::Network { message, .. } => Self::Network { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://viacep.com.br", "https://viacep.com.br")]
    #[case("https://viacep.com.br/", "https://viacep.com.br")]
    #[case(" http://localhost:8080/proxy/ ", "http://localhost:8080/proxy")]
    fn base_url_is_trimmed(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(parse_base_url(raw).expect("valid base URL"), expected);
    }

    #[rstest]
    #[case("not a url")]
    #[case("ftp://example.com")]
    #[case("")]
    fn base_url_rejects_non_http(#[case] raw: &str) {
        let err = parse_base_url(raw).expect_err("should reject");
        assert!(matches!(err, ProviderBuildError::InvalidBaseUrl { .. }));
    }

    #[rstest]
    fn endpoint_appends_path() {
        let url = endpoint("https://nominatim.openstreetmap.org/", "/search").expect("endpoint");
        assert_eq!(url.as_str(), "https://nominatim.openstreetmap.org/search");
    }

    #[rstest]
    fn transport_failures_keep_their_cause() {
        let failure = TransportFailure::Http {
            url: "https://viacep.com.br/ws/01001000/json/".to_owned(),
            status: 502,
        };

        assert_eq!(
            AddressLookupError::from(failure.clone()),
            AddressLookupError::Http {
                url: "https://viacep.com.br/ws/01001000/json/".to_owned(),
                status: 502,
            }
        );
        assert_eq!(GeocodeError::from(failure.clone()), GeocodeError::Http { status: 502 });
        assert_eq!(
            PrimaryUnavailable::from(failure),
            PrimaryUnavailable::Http { status: 502 }
        );
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = HttpClientConfig::default()
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert!(config.build_client().is_ok());
    }
}
