//! Serves the taskboard HTTP API.
//!
//! Configuration comes from the environment (and a `.env` file when present);
//! see [`AppConfig::from_env`] for the recognised variables.

use std::process::ExitCode;
use taskboard::config::AppConfig;
use taskboard::server;
use taskboard::telemetry::{LogFormat, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    init_tracing(LogFormat::from_env());
    if let Err(err) = dotenv
        && !err.not_found()
    {
        tracing::warn!(error = %err, "failed to read .env");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "configuration loaded");

    match server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server terminated with an error");
            ExitCode::FAILURE
        }
    }
}
