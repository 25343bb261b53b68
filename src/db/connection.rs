//! Per-request connection acquisition.

use tokio_postgres::{Client, NoTls};

use super::config::DbConfig;
use super::errors::{DbError, DbResult};

/// Establish a single datastore connection.
///
/// Parameters come from the environment at call time. The returned
/// client owns the connection: dropping it ends the driver task
/// spawned here. Single attempt; no retry or backoff.
///
/// # Errors
/// Returns `DbError::ConfigError` for missing parameters and
/// `DbError::ConnectionError` if the connection cannot be established.
pub async fn connect() -> DbResult<Client> {
    let config = DbConfig::from_env()?;

    let (client, connection) = config
        .pg_config()
        .connect(NoTls)
        .await
        .map_err(|e| DbError::ConnectionError(e.to_string()))?;

    tokio::spawn(async move {
        if let Err(_e) = connection.await {
            // drop error
        }
    });

    Ok(client)
}
