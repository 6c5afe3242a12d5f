#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)] // TODO(deps-001): remove once transitive dependencies converge.

//! MachiMeshi backend: accounts, shops, menus, favorites, notifications,
//! and image uploads behind an Axum HTTP API.

mod app_state;
mod auth;
mod db;
mod handlers;
mod http;
mod middleware;
pub mod openapi;
mod routes;
pub mod server;
mod services;
mod tracer;

pub use server::run;

#[cfg(test)]
mod server_test;
