//! Integration tests for the MachiMeshi server CLI.

use serial_test::serial;
use shared::config::server::Config;
use std::env;
use std::process::Command;

#[test]
fn test_server_help_command() {
    let output = Command::new("cargo")
        .args(["run", "-p", "server", "--", "--help"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Backend server and tools for MachiMeshi"));
    assert!(stdout.contains("serve"));
}

#[test]
fn test_server_invalid_command() {
    let output = Command::new("cargo")
        .args(["run", "-p", "server", "--", "invalid-command"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to execute command");

    // Unknown subcommands exit non-zero.
    assert!(!output.status.success());
}

#[test]
#[serial]
fn test_port_override_env_var() {
    unsafe {
        env::set_var("MACHIMESHI_SERVER_PORT", "9000");
    }

    let config = Config::load_config(None, None).expect("config should load");
    assert_eq!(config.server.port, 9000);

    unsafe {
        env::remove_var("MACHIMESHI_SERVER_PORT");
    }
}

#[test]
#[serial]
fn test_database_url_env_var() {
    unsafe {
        env::set_var("MACHIMESHI_DATABASE_URL", "postgresql://localhost/test");
    }

    let config = Config::load_config(None, None).expect("config should load");
    assert_eq!(config.db.url, "postgresql://localhost/test");

    unsafe {
        env::remove_var("MACHIMESHI_DATABASE_URL");
    }
}

#[test]
#[serial]
fn test_explicit_port_wins_over_env_var() {
    unsafe {
        env::set_var("MACHIMESHI_SERVER_PORT", "9000");
    }

    let config = Config::load_config(None, Some(7070)).expect("config should load");
    assert_eq!(config.server.port, 7070);

    unsafe {
        env::remove_var("MACHIMESHI_SERVER_PORT");
    }
}

#[test]
#[serial]
fn test_default_port_without_env_var() {
    unsafe {
        env::remove_var("MACHIMESHI_SERVER_PORT");
    }

    let config = Config::load_config(None, None).expect("config should load");
    assert_eq!(config.server.port, 8080);
}
