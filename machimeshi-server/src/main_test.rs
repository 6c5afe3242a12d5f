//! Tests for CLI argument parsing.

use super::{Cli, Commands};
use clap::Parser;
use std::path::PathBuf;

/// Test the serve subcommand parses its flags
#[test]
fn test_serve_command_parses_port_and_config() {
    let cli = Cli::try_parse_from([
        "machimeshi",
        "serve",
        "--port",
        "9001",
        "--config",
        "config/machimeshi.yaml",
    ])
    .unwrap();

    match cli.command {
        Commands::Serve { port, config } => {
            assert_eq!(port, Some(9001));
            assert_eq!(config, Some(PathBuf::from("config/machimeshi.yaml")));
        }
    }
}

/// Test the serve subcommand works without flags
#[test]
fn test_serve_command_defaults() {
    let cli = Cli::try_parse_from(["machimeshi", "serve"]).unwrap();

    match cli.command {
        Commands::Serve { port, config } => {
            assert_eq!(port, None);
            assert_eq!(config, None);
        }
    }
}

/// Test unknown subcommands are rejected
#[test]
fn test_unknown_command_is_rejected() {
    assert!(Cli::try_parse_from(["machimeshi", "stream"]).is_err());
}

/// Test a malformed port value is rejected
#[test]
fn test_invalid_port_is_rejected() {
    assert!(Cli::try_parse_from(["machimeshi", "serve", "--port", "not-a-port"]).is_err());
}
