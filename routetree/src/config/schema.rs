//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use routetree::config::Config;
///
/// let config: Config = serde_yaml::from_str("base_path: /app\noutput_format: yaml\n").unwrap();
/// assert_eq!(config.base_path(), "/app");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base path every route is resolved beneath.
    pub base_path: Option<String>,

    /// Output format for resolved trees.
    pub output_format: Option<OutputFormat>,

    /// Route schema file used when none is given on the command line.
    ///
    /// Relative paths in a configuration file are resolved against the
    /// directory containing that file.
    pub schema: Option<PathBuf>,
}

impl Config {
    /// The configured base path, or the empty base path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        self.base_path.as_deref().unwrap_or("")
    }

    /// The configured output format, or the default.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}
