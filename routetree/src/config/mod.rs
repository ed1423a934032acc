//! Configuration system for routetree.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `routetree.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ROUTETREE_*`)
//! 3. Explicit config file (via `ConfigBuilder::with_config_file`)
//! 4. Private project config (`routetree.local.yaml`)
//! 5. Project config (`routetree.yaml`)
//! 6. User config (`~/.routetree/config.yaml`)
//! 7. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use routetree::config::{Config, ConfigBuilder};
//! use routetree::output::OutputFormat;
//!
//! let custom = Config {
//!     base_path: Some("/app".to_string()),
//!     output_format: Some(OutputFormat::List),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_path(), "/app");
//! assert_eq!(config.output_format(), OutputFormat::List);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
