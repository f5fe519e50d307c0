//! Command-line entry point for the galaxy collection gateway.
//!
//! `galaxy-api serve` runs the HTTP API; `galaxy-api check-config` prints
//! the configuration that `serve` would use. Every option can also come
//! from the environment or a `.env` file.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary target
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::{Commands, ServeArgs};
pub use parser::Cli;
