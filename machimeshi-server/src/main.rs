#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)] // TODO(deps-001): remove once transitive dependencies converge.

//! Main entry point for the MachiMeshi backend CLI.

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use shared::config::server::Config;
use std::error::Error;
use std::path::PathBuf;

#[cfg(test)]
mod main_test;

/// Main CLI structure for the MachiMeshi server
#[derive(Debug, Parser)]
#[command(name = "MachiMeshi CLI")]
#[command(about = "Backend server and tools for MachiMeshi", long_about = None)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands for the MachiMeshi CLI
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the backend server
    Serve {
        /// The port number to bind the server to (e.g., 8080). Example usage: `--port 8080`
        #[arg(
            long,
            short,
            help = "The port number to bind the server to (e.g., 8080). Example usage: `--port 8080`"
        )]
        port: Option<u16>,

        /// Path to the configuration file (optional)
        #[arg(
            long,
            short,
            help = "Path to the configuration file (e.g., config.yaml or config.json). If not provided, defaults will be used."
        )]
        config: Option<PathBuf>,
    },
}

/// Initializes environment variables and returns the parsed CLI.
///
/// # Returns
/// Returns the parsed [`Cli`] structure.
#[must_use]
pub fn initialize_cli() -> Cli {
    dotenv().ok();
    Cli::parse()
}

/// Handles the serve command by loading configuration and starting the server.
///
/// # Arguments
/// * `port` - Optional port number overriding the configuration.
/// * `config` - Optional path to the configuration file.
///
/// # Errors
/// Returns an error if configuration loading or server startup fails.
pub async fn handle_serve_command(
    port: Option<u16>,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let resolved_config =
        Config::load_config(config, port).map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
    server::run(resolved_config).await?;
    Ok(())
}

/// Main application entry point.
///
/// # Errors
/// Returns an error if the application fails to initialize or run.
pub async fn run_app() -> Result<(), Box<dyn Error>> {
    let cli = initialize_cli();

    match cli.command {
        Commands::Serve { port, config } => {
            handle_serve_command(port, config).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    run_app().await
}
