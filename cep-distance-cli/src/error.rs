//! Error types emitted by the `cep-distance` CLI.

use std::sync::Arc;

use cep_distance_core::ResolutionError;
use cep_distance_data::ProviderBuildError;
use thiserror::Error;

const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

/// Errors emitted by the `cep-distance` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// The request timeout was set to zero.
    #[error("--{field} must be at least 1 second")]
    ZeroTimeout {
        /// Flag name without leading dashes.
        field: &'static str,
    },
    /// A configured service base URL could not be used.
    #[error("invalid --{field} {url:?}: {reason}")]
    InvalidBaseUrl {
        /// Flag name without leading dashes.
        field: &'static str,
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Constructing an HTTP adapter failed.
    #[error("failed to build client for --{field}: {source}")]
    BuildProvider {
        /// Flag naming the service base URL.
        field: &'static str,
        /// Underlying construction error.
        #[source]
        source: ProviderBuildError,
    },
    /// The async runtime could not be started.
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The distance could not be resolved.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    /// Serialising the JSON output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the JSON output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// Caller mistakes (bad arguments, malformed or unknown postal codes)
    /// exit with 2. Everything else exits with 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ArgumentParsing(err) => u8::try_from(err.exit_code()).unwrap_or(EXIT_USAGE),
            Self::MissingArgument { .. } | Self::ZeroTimeout { .. } => EXIT_USAGE,
            Self::Resolution(err) if err.is_caller_error() => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
