//! Entry point for the `cep-distance` command.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use cep_distance_cli::CliError;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    init_logging();
    match cep_distance_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let CliError::ArgumentParsing(usage) = &err {
                // Clap renders usage, help and version output itself.
                if usage.print().is_err() {
                    log::error!("{usage}");
                }
            } else {
                log::error!("{err}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if let Err(err) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        log::warn!("tracing init failed: {err}");
    }
}
