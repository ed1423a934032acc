//! Join command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use routetree::merge_paths;

/// Join path fragments into a single normalized path.
#[derive(Args)]
pub struct JoinCommand {
    /// Path fragments to join; with none, the root path is printed
    #[arg(value_name = "FRAGMENT")]
    pub fragments: Vec<String>,
}

impl JoinCommand {
    /// Execute the join command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", merge_paths(&self.fragments));
        Ok(())
    }
}
