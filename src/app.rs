//! Process runtime.
//!
//! Owns the storage handle for the lifetime of the process: opens it at
//! startup, waits for a shutdown signal, and closes it.

use crate::config::Config;
use crate::infrastructure::persistence::PgStorage;

use anyhow::{Context, Result};

/// Opens storage and keeps it alive until Ctrl-C.
///
/// HTTP handlers are not wired yet; the server settings are only logged.
///
/// # Errors
///
/// Returns an error if the storage bootstrap fails or the signal handler
/// cannot be installed. The storage is closed in the latter case.
pub async fn run(config: Config) -> Result<()> {
    tracing::info!("starting database connection");
    let storage = PgStorage::open(&config.database)
        .await
        .context("failed to init storage")?;
    tracing::info!("database connected");

    tracing::debug!(
        address = %config.app.http_server.address,
        "http server is not enabled in this build"
    );

    let signal = tokio::signal::ctrl_c().await;

    storage.close().await;
    tracing::info!("database closed");

    signal.context("failed to listen for shutdown signal")
}
