#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)] // TODO(deps-001): remove once transitive dependencies converge.

//! Shared models and configuration for the MachiMeshi platform.
//!
//! Everything that crosses the wire between the server and the web client
//! lives here, together with the server configuration structures.

pub mod config;
pub mod models;
