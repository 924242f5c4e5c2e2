//! lumenrate command-line front end.
//!
//! Usage:
//!   lumenrate to-outside <XLM_AMOUNT> <RATE>
//!   lumenrate from-outside <OUTSIDE_AMOUNT> <RATE>
//!   lumenrate compare <AMOUNT1> <AMOUNT2>
//!   lumenrate within <AMOUNT1> <AMOUNT2> [--factor <FACTOR>]
//!   lumenrate parse <DECIMAL>

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lumenrate_shared::config::LoggingConfig;
use lumenrate_shared::{AppConfig, AppError};

mod cli;
mod commands;
mod output;

use cli::Cli;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match AppConfig::load().map_err(AppError::from) {
        Ok(config) => config,
        Err(err) => {
            init_tracing(&LoggingConfig::default().filter);
            return fail(cli.json, &err);
        }
    };
    init_tracing(&config.logging.filter);

    let result = commands::execute(&cli.command, &config)
        .and_then(|outcome| output::print_outcome(cli.json, &outcome));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(cli.json, &err),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn fail(json: bool, err: &AppError) -> ExitCode {
    error!(code = err.error_code(), "command failed");
    output::print_error(json, err);
    ExitCode::from(err.exit_code())
}
