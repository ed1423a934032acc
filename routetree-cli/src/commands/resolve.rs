//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which loads a route schema,
//! resolves it beneath a base path, and prints the result.

use crate::error::CliError;
use crate::utils::{load_config, resolve_file, schema_path, GlobalOptions};
use clap::Args;
use routetree::OutputFormat;
use std::path::PathBuf;

/// Resolve a route schema and print the resulting paths.
#[derive(Args)]
pub struct ResolveCommand {
    /// Route schema file (YAML, or JSON by `.json` extension)
    ///
    /// Defaults to the `schema` entry of the configuration.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Base path every route is resolved beneath
    #[arg(long, value_name = "PATH")]
    pub base_path: Option<String>,

    /// Output format (json, yaml, list)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_config(global)?;
        let path = schema_path(self.file, &config)?;

        let base_path = self.base_path.as_deref().unwrap_or(config.base_path());
        let format = self.format.unwrap_or_else(|| config.output_format());

        let resolved = resolve_file(&path, base_path)?;
        let output = format.create_formatter().format(&resolved)?;
        println!("{output}");

        log::info!(
            "Resolved {} routes from {}",
            resolved.flatten().len(),
            path.display()
        );

        Ok(())
    }
}
