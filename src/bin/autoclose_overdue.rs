//! Runs one overdue autoclose pass and exits.
//!
//! Intended for an external scheduler such as cron. Uses the same
//! environment configuration as the server.

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

    let result = match AppConfig::from_env() {
        Ok(config) => server::run_autoclose_once(&config).await,
        Err(err) => Err(err.into()),
    };

    match result {
        Ok(closed) => {
            tracing::info!(closed, "autoclose pass complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "autoclose pass failed");
            ExitCode::FAILURE
        }
    }
}
