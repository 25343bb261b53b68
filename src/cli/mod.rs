//! CLI module for propsearch
//!
//! Provides command-line interface for:
//! - serve: Bind the HTTP listener and serve the search API

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliResult};
