//! CLI command implementations
//!
//! The serve command owns the tokio runtime; everything below the CLI
//! boundary is async.

use std::net::SocketAddr;

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse command line arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Boot the HTTP server and serve until the process is stopped.
pub fn serve(host: String, port: u16) -> CliResult<()> {
    // Reject unparsable bind addresses here, before the server boots.
    format!("{}:{}", host, port)
        .parse::<SocketAddr>()
        .map_err(|e| CliError::config_error(format!("Invalid bind address {}:{}: {}", host, port, e)))?;

    let config = HttpServerConfig { host, port };
    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::io_error(format!("HTTP server error: {}", e)))
}
