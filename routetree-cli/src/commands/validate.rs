//! Command to validate a route schema.

use crate::error::CliError;
use crate::utils::{load_config, resolve_file, schema_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Validate a route schema file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Route schema file to validate
    ///
    /// Defaults to the `schema` entry of the configuration.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_config(global)?;
        let path = schema_path(self.file, &config)?;

        let resolved = resolve_file(&path, config.base_path())?;
        log::info!("{} resolves to {} paths", path.display(), resolved.flatten().len());

        println!("ok");
        Ok(())
    }
}
