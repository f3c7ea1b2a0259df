//! Process wiring: storage selection, HTTP serving, the autoclose job and
//! graceful shutdown.

use crate::api::{AppState, build_app_router};
use crate::board::{
    adapters::postgres::{PostgresBoardRepository, build_pool},
    ports::{BoardRepositoryError, ProjectRepository, TaskRepository},
};
use crate::config::{AppConfig, ConfigError, StorageBackend};
use crate::scheduler::run_autoclose_loop;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// How long shutdown waits for the autoclose job to stop.
const JOB_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Errors that abort process startup or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The storage backend could not be initialised.
    #[error("storage initialisation failed: {0}")]
    Storage(#[from] BoardRepositoryError),
    /// Binding or serving the HTTP listener failed.
    #[error("http server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the application state for the configured storage backend.
///
/// For `PostgreSQL`, a pool is opened and the schema is applied.
///
/// # Errors
///
/// Returns [`ServerError::Storage`] when the database is unreachable or the
/// migration fails.
pub async fn build_state(config: &AppConfig) -> Result<AppState, ServerError> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on exit");
            Ok(AppState::in_memory(config.limits))
        }
        StorageBackend::Postgres => {
            let url = config.database.connection_url();
            let max_size = config.database.pool_max_size;
            let pool = tokio::task::spawn_blocking(move || build_pool(&url, max_size))
                .await
                .map_err(BoardRepositoryError::persistence)??;
            let repository = Arc::new(PostgresBoardRepository::new(pool));
            repository.migrate().await?;
            tracing::info!(
                host = %config.database.host,
                database = %config.database.name,
                "database ready"
            );
            let project_repository: Arc<dyn ProjectRepository> = repository.clone();
            let task_repository: Arc<dyn TaskRepository> = repository;
            Ok(AppState::new(project_repository, task_repository, config.limits))
        }
    }
}

/// Serves the API and runs the autoclose job until a shutdown signal.
///
/// # Errors
///
/// Returns [`ServerError`] when storage setup, binding or serving fails.
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    let state = build_state(&config).await?;

    let cancel = CancellationToken::new();
    let job = tokio::spawn(run_autoclose_loop(
        state.autoclose(),
        config.autoclose_interval(),
        cancel.clone(),
    ));

    let app = build_app_router(state, config.server.request_timeout());
    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, "starting server");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    tracing::info!("server stopped accepting connections");
    cancel.cancel();
    match tokio::time::timeout(JOB_SHUTDOWN_GRACE, job).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => tracing::error!(error = %err, "autoclose job terminated abnormally"),
        Err(_) => tracing::warn!("autoclose job did not stop in time"),
    }
    tracing::info!("graceful shutdown complete");

    served.map_err(ServerError::from)
}

/// Runs a single autoclose pass against the configured storage.
///
/// # Errors
///
/// Returns [`ServerError::Storage`] when storage setup or the pass fails.
pub async fn run_autoclose_once(config: &AppConfig) -> Result<usize, ServerError> {
    let state = build_state(config).await?;
    let closed = state.autoclose().run_once().await.map_err(|err| match err {
        crate::board::services::BoardServiceError::Repository(repository) => {
            ServerError::Storage(repository)
        }
        other => ServerError::Storage(BoardRepositoryError::persistence(other)),
    })?;
    Ok(closed)
}

/// Waits for Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl-C, starting graceful shutdown"),
        () = terminate => tracing::info!("received SIGTERM, starting graceful shutdown"),
    }
}
