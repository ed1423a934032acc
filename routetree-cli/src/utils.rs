//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: configuration
//! loading, schema file selection, and tree resolution.

use crate::error::CliError;
use routetree::{create_routes, load_file, Config, ConfigBuilder, ResolvedRouteNode};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Project configuration is discovered from the current directory upward;
/// an explicit `--config` file is layered on top, and environment
/// variables override both.
pub fn load_config(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(path) = &global.config {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the schema file from the command line or configuration.
pub fn schema_path(arg: Option<PathBuf>, config: &Config) -> Result<PathBuf, CliError> {
    arg.or_else(|| config.schema.clone()).ok_or_else(|| {
        CliError::InvalidArguments(
            "no route schema given (pass a FILE or set `schema` in routetree.yaml)".to_string(),
        )
    })
}

/// Load a schema file and resolve it beneath `base_path`.
pub fn resolve_file(path: &Path, base_path: &str) -> Result<ResolvedRouteNode, CliError> {
    let routes = load_file(path)?;
    log::debug!(
        "resolving {} top-level routes from {}",
        routes.len(),
        path.display()
    );
    Ok(create_routes(&routes, base_path)?)
}
