//! Library exports for routetree-cli.
//!
//! This module exports the CLI structure for use by integration tests and
//! documentation tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for build script
pub use cli::Cli;
