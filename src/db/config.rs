//! Datastore connection parameters.
//!
//! Read from the process environment on every call; nothing is cached
//! between requests.

use std::env;

use super::errors::{DbError, DbResult};

/// Connection parameters for the listings datastore
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub user: String,
    pub host: String,
    pub dbname: String,
    pub password: String,
    pub port: u16,
}

impl DbConfig {
    /// Read connection parameters from the process environment.
    ///
    /// # Errors
    /// Returns `DbError::ConfigError` if a variable is unset or the
    /// port does not parse.
    pub fn from_env() -> DbResult<Self> {
        let user = require_var("DB_USER")?;
        let host = require_var("DB_HOST")?;
        let dbname = require_var("DB_NAME")?;
        let password = require_var("DB_PASSWORD")?;
        let port = require_var("DB_PORT")?;
        let port = port.parse().map_err(|_| {
            DbError::ConfigError(format!("DB_PORT is not a valid port number: {port}"))
        })?;

        Ok(Self {
            user,
            host,
            dbname,
            password,
            port,
        })
    }

    /// Build the driver configuration from these parameters.
    pub fn pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .user(&self.user)
            .host(&self.host)
            .dbname(&self.dbname)
            .password(&self.password)
            .port(self.port);
        config
    }
}

fn require_var(name: &str) -> DbResult<String> {
    env::var(name).map_err(|_| DbError::ConfigError(format!("{name} is required")))
}
