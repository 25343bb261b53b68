//! CLI argument definitions using clap
//!
//! Commands:
//! - propsearch serve --host <addr> --port <port>

use clap::{Parser, Subcommand};

/// propsearch - HTTP search API over a property listings table
#[derive(Parser, Debug)]
#[command(name = "propsearch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Address to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
