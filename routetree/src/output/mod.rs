//! Output formatting for resolved route trees.
//!
//! This module renders a [`ResolvedRouteNode`] as JSON, YAML, or a flat
//! listing of dotted key chains and their paths.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::route::ResolvedRouteNode;

pub use formatters::{JsonFormatter, ListFormatter, YamlFormatter};

/// Trait for formatting resolved route trees into different output formats.
pub trait OutputFormatter {
    /// Format the given route tree into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, routes: &ResolvedRouteNode) -> Result<String>;
}

/// Available output formats for resolved route trees.
///
/// # Examples
///
/// ```
/// use routetree::output::OutputFormat;
///
/// let format: OutputFormat = "yaml".parse().unwrap();
/// assert_eq!(format, OutputFormat::Yaml);
/// assert_eq!(format.to_string(), "yaml");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON mapping.
    #[default]
    Json,
    /// YAML mapping.
    Yaml,
    /// One `dotted.key<TAB>/path` line per path.
    List,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::List => Box::new(ListFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::List => write!(f, "list"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "list" => Ok(Self::List),
            _ => Err(Error::Validation {
                field: "output_format".to_string(),
                message: format!("unknown output format '{s}' (expected json, yaml, or list)"),
            }),
        }
    }
}
