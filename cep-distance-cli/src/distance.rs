//! `distance` command implementation.

use std::io::Write;
use std::time::Duration;

use cep_distance_core::{
    DistanceReport, DistanceResolver, DistanceResponse, ErrorBody, ResolutionError,
    ResolveDistance,
};
use cep_distance_data::{
    DEFAULT_COURTESY_DELAY, DEFAULT_DISTANCE_MATRIX_BASE_URL, DEFAULT_NOMINATIM_BASE_URL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_VIACEP_BASE_URL, GoogleDistanceMatrix,
    HttpClientConfig, NominatimGeocoder, ProviderBuildError, RoutingCredential, ViaCepDirectory,
};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DESTINATION_POSTAL_CODE, ARG_DISTANCE_MATRIX_BASE_URL, ARG_GEOCODE_DELAY_MS,
    ARG_NOMINATIM_BASE_URL, ARG_ORIGIN_POSTAL_CODE, ARG_ROUTING_API_KEY, ARG_TIMEOUT_SECS,
    ARG_USER_AGENT, ARG_VIACEP_BASE_URL, CliError, ENV_DESTINATION_POSTAL_CODE,
    ENV_LEGACY_API_KEY, ENV_ORIGIN_POSTAL_CODE,
};

/// CLI arguments for the `distance` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Resolve the driving distance between two postal codes. \
                 Without a routing API key, or when the routing service \
                 fails, the great-circle distance between the geocoded \
                 addresses is reported instead.",
    about = "Resolve the distance between two postal codes"
)]
#[ortho_config(prefix = "CEP_DISTANCE")]
pub(crate) struct DistanceArgs {
    /// Origin postal code, `NNNNN-NNN` or `NNNNNNNN`.
    #[arg(long = ARG_ORIGIN_POSTAL_CODE, value_name = "cep")]
    #[serde(default)]
    pub(crate) origin_postal_code: Option<String>,
    /// Destination postal code, `NNNNN-NNN` or `NNNNNNNN`.
    #[arg(long = ARG_DESTINATION_POSTAL_CODE, value_name = "cep")]
    #[serde(default)]
    pub(crate) destination_postal_code: Option<String>,
    /// Google Distance Matrix API key. Falls back to `Maps_API_KEY`.
    #[arg(long = ARG_ROUTING_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) routing_api_key: Option<String>,
    /// Base URL of the ViaCEP service.
    #[arg(long = ARG_VIACEP_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) viacep_base_url: Option<String>,
    /// Base URL of the Nominatim service.
    #[arg(long = ARG_NOMINATIM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) nominatim_base_url: Option<String>,
    /// Base URL of the Google Maps API.
    #[arg(long = ARG_DISTANCE_MATRIX_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) distance_matrix_base_url: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Pause before each geocoding request, in milliseconds.
    #[arg(long = ARG_GEOCODE_DELAY_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) geocode_delay_ms: Option<u64>,
    /// User agent sent with every request.
    #[arg(long = ARG_USER_AGENT, value_name = "agent")]
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
}

impl DistanceArgs {
    pub(crate) fn into_config(self) -> Result<DistanceConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        let legacy_key = std::env::var(ENV_LEGACY_API_KEY).ok();
        DistanceConfig::from_args(merged, legacy_key)
    }
}

/// Resolved `distance` command configuration.
#[derive(Debug, Clone)]
pub(crate) struct DistanceConfig {
    pub(crate) origin_postal_code: String,
    pub(crate) destination_postal_code: String,
    /// `None` when no usable key was configured.
    pub(crate) credential: Option<RoutingCredential>,
    pub(crate) viacep_base_url: String,
    pub(crate) nominatim_base_url: String,
    pub(crate) distance_matrix_base_url: String,
    pub(crate) http: HttpClientConfig,
    pub(crate) courtesy_delay: Duration,
}

impl DistanceConfig {
    /// Build the configuration, taking the key from `legacy_key` when no
    /// layer supplied one.
    pub(crate) fn from_args(
        args: DistanceArgs,
        legacy_key: Option<String>,
    ) -> Result<Self, CliError> {
        let origin_postal_code = args.origin_postal_code.ok_or(CliError::MissingArgument {
            field: ARG_ORIGIN_POSTAL_CODE,
            env: ENV_ORIGIN_POSTAL_CODE,
        })?;
        let destination_postal_code =
            args.destination_postal_code
                .ok_or(CliError::MissingArgument {
                    field: ARG_DESTINATION_POSTAL_CODE,
                    env: ENV_DESTINATION_POSTAL_CODE,
                })?;

        let credential = RoutingCredential::from_setting(args.routing_api_key)
            .or_else(|| RoutingCredential::from_setting(legacy_key));

        let timeout_secs = args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(CliError::ZeroTimeout {
                field: ARG_TIMEOUT_SECS,
            });
        }
        let http = HttpClientConfig::default()
            .with_timeout(Duration::from_secs(timeout_secs))
            .with_user_agent(
                args.user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            );
        let courtesy_delay = args
            .geocode_delay_ms
            .map_or(DEFAULT_COURTESY_DELAY, Duration::from_millis);

        Ok(Self {
            origin_postal_code,
            destination_postal_code,
            credential,
            viacep_base_url: args
                .viacep_base_url
                .unwrap_or_else(|| DEFAULT_VIACEP_BASE_URL.to_owned()),
            nominatim_base_url: args
                .nominatim_base_url
                .unwrap_or_else(|| DEFAULT_NOMINATIM_BASE_URL.to_owned()),
            distance_matrix_base_url: args
                .distance_matrix_base_url
                .unwrap_or_else(|| DEFAULT_DISTANCE_MATRIX_BASE_URL.to_owned()),
            http,
            courtesy_delay,
        })
    }
}

impl TryFrom<DistanceArgs> for DistanceConfig {
    type Error = CliError;

    fn try_from(args: DistanceArgs) -> Result<Self, Self::Error> {
        Self::from_args(args, None)
    }
}

/// Builds a resolver for the current invocation.
pub(super) trait ResolverBuilder {
    fn build(&self, config: &DistanceConfig) -> Result<Box<dyn ResolveDistance>, CliError>;
}

pub(super) struct DefaultResolverBuilder;

impl ResolverBuilder for DefaultResolverBuilder {
    fn build(&self, config: &DistanceConfig) -> Result<Box<dyn ResolveDistance>, CliError> {
        let directory = ViaCepDirectory::new(&config.viacep_base_url, &config.http)
            .map_err(|source| provider_error(ARG_VIACEP_BASE_URL, source))?;
        let geocoder = NominatimGeocoder::new(&config.nominatim_base_url, &config.http)
            .map_err(|source| provider_error(ARG_NOMINATIM_BASE_URL, source))?
            .with_courtesy_delay(config.courtesy_delay);
        let routing = GoogleDistanceMatrix::new(
            &config.distance_matrix_base_url,
            &config.http,
            config.credential.clone(),
        )
        .map_err(|source| provider_error(ARG_DISTANCE_MATRIX_BASE_URL, source))?;

        if !routing.is_configured() {
            debug!("no {ARG_ROUTING_API_KEY} configured; distances will be geodesic");
        }
        Ok(Box::new(DistanceResolver::new(directory, geocoder, routing)))
    }
}

fn provider_error(field: &'static str, source: ProviderBuildError) -> CliError {
    match source {
        ProviderBuildError::InvalidBaseUrl { url, reason } => CliError::InvalidBaseUrl {
            field,
            url,
            reason,
        },
        other => CliError::BuildProvider {
            field,
            source: other,
        },
    }
}

pub(super) fn run_distance(args: DistanceArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultResolverBuilder;
    run_distance_with(args, &builder, &mut stdout)
}

pub(super) fn run_distance_with(
    args: DistanceArgs,
    builder: &dyn ResolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_distance(&config, builder, writer)
}

/// Resolve the configured pair and write the JSON outcome.
///
/// A resolution failure is written as an error body before being returned.
pub(super) fn execute_distance(
    config: &DistanceConfig,
    builder: &dyn ResolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let resolver = builder.build(config)?;
    match resolve_blocking(resolver.as_ref(), config)? {
        Ok(report) => write_json(writer, &DistanceResponse::from(report)),
        Err(err) => {
            write_json(writer, &ErrorBody::from(&err))?;
            Err(CliError::Resolution(err))
        }
    }
}

fn resolve_blocking(
    resolver: &dyn ResolveDistance,
    config: &DistanceConfig,
) -> Result<Result<DistanceReport, ResolutionError>, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    Ok(runtime.block_on(resolver.resolve(
        &config.origin_postal_code,
        &config.destination_postal_code,
    )))
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<DistanceConfig, CliError> {
    let merged = DistanceArgs::merge_from_layers(layers).map_err(CliError::from)?;
    DistanceConfig::try_from(merged)
}
