//! # Configuration
//!
//! Structured configuration for the MachiMeshi server. The loader resolves
//! values from a YAML/JSON file, `MACHIMESHI_*` environment variables, and
//! built-in defaults, in that order of precedence.

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
