//! Error types for the routetree library.
//!
//! This module provides the error hierarchy for building route trees and
//! loading route schemas, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a routetree error.
///
/// # Examples
///
/// ```
/// use routetree::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/dashboard".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the routetree library.
#[derive(Debug, Error)]
pub enum Error {
    /// A route entry held a value that is neither a path fragment nor a
    /// nested route mapping.
    #[error("invalid route value for '{key}' under '{path}': expected a string or mapping, found {found}")]
    InvalidRouteValue {
        /// The offending key.
        key: String,
        /// Dotted key chain of the enclosing node (empty at the root).
        path: String,
        /// Short description of the value that was found.
        found: String,
    },

    /// A `_basePath` override was present but was not a string.
    #[error("invalid _basePath under '{path}': expected a string, found {found}")]
    InvalidBasePath {
        /// Dotted key chain of the node carrying the override.
        path: String,
        /// Short description of the value that was found.
        found: String,
    },

    /// A route mapping used a key that is not a string.
    #[error("invalid route key under '{path}': keys must be strings, found {found}")]
    InvalidKey {
        /// Dotted key chain of the node carrying the key.
        path: String,
        /// Short description of the key that was found.
        found: String,
    },

    /// A typed route tree declared an entry under the reserved base path key.
    #[error("reserved key '_basePath' used as a route under '{path}'; set it with RouteNode::with_base_path")]
    ReservedKey {
        /// Dotted key chain of the node carrying the entry.
        path: String,
    },

    /// A resolved route entry was missing or had the wrong kind.
    #[error("route lookup failed for '{key}': {reason}")]
    RouteLookup {
        /// The key that was looked up.
        key: String,
        /// Why the lookup failed.
        reason: String,
    },

    /// A route schema file could not be read.
    #[error("cannot read route schema {}: {source}", path.display())]
    SchemaRead {
        /// The schema file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Returns true if this error was caused by malformed route declarations
    /// rather than by the environment (files, parsing, configuration).
    #[must_use]
    pub fn is_route_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRouteValue { .. }
                | Self::InvalidBasePath { .. }
                | Self::InvalidKey { .. }
                | Self::ReservedKey { .. }
        )
    }
}
