//! Kebab command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use routetree::to_kebab_case;

/// Convert text to the segment a nested route key produces.
#[derive(Args)]
pub struct KebabCommand {
    /// Text to convert; multiple words are joined with a space
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,
}

impl KebabCommand {
    /// Execute the kebab command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", to_kebab_case(&self.text.join(" ")));
        Ok(())
    }
}
