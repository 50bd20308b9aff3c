//! Command-line interface resolving distances between Brazilian postal codes.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod distance;
mod error;

use distance::DistanceArgs;
pub use error::CliError;

const ARG_ORIGIN_POSTAL_CODE: &str = "origin-postal-code";
const ARG_DESTINATION_POSTAL_CODE: &str = "destination-postal-code";
const ARG_ROUTING_API_KEY: &str = "routing-api-key";
const ARG_VIACEP_BASE_URL: &str = "viacep-base-url";
const ARG_NOMINATIM_BASE_URL: &str = "nominatim-base-url";
const ARG_DISTANCE_MATRIX_BASE_URL: &str = "distance-matrix-base-url";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ARG_GEOCODE_DELAY_MS: &str = "geocode-delay-ms";
const ARG_USER_AGENT: &str = "user-agent";
const ENV_ORIGIN_POSTAL_CODE: &str = "CEP_DISTANCE_CMDS_DISTANCE_ORIGIN_POSTAL_CODE";
const ENV_DESTINATION_POSTAL_CODE: &str = "CEP_DISTANCE_CMDS_DISTANCE_DESTINATION_POSTAL_CODE";
/// Variable read for the routing API key when no layer sets one.
const ENV_LEGACY_API_KEY: &str = "Maps_API_KEY";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, when
/// the adapters cannot be built, or when the distance cannot be resolved.
/// A resolution failure has already been written to stdout as a JSON error
/// body when it is returned.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Distance(args) => distance::run_distance(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "cep-distance",
    about = "Distance in kilometres between two Brazilian postal codes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve the distance between two postal codes.
    Distance(DistanceArgs),
}

#[cfg(test)]
mod tests;
