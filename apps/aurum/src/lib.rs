//! # Aurum Application Library
//!
//! The HTTP API, CLI and configuration of the `aurum` binary, exposed as a
//! library so integration tests can drive the router directly.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
