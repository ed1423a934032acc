//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ROUTETREE_*` environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::Result;
use crate::output::OutputFormat;

/// Overrides the base path.
pub const ENV_BASE_PATH: &str = "ROUTETREE_BASE_PATH";

/// Overrides the output format.
pub const ENV_OUTPUT_FORMAT: &str = "ROUTETREE_OUTPUT_FORMAT";

/// Overrides the default schema file.
pub const ENV_SCHEMA: &str = "ROUTETREE_SCHEMA";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use routetree::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if `ROUTETREE_OUTPUT_FORMAT` is not a known format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(base_path) = env::var(ENV_BASE_PATH) {
            config.base_path = Some(base_path);
        }

        if let Ok(format) = env::var(ENV_OUTPUT_FORMAT) {
            config.output_format = Some(format.parse::<OutputFormat>()?);
        }

        if let Ok(schema) = env::var(ENV_SCHEMA) {
            config.schema = Some(PathBuf::from(schema));
        }

        Ok(())
    }
}
