//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, JoinCommand, KebabCommand, ResolveCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving route declaration files into URL paths.
#[derive(Parser)]
#[command(name = "routetree")]
#[command(version, about = "Resolve nested route declarations into URL paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load this configuration file on top of discovered ones
    #[arg(long, value_name = "PATH", global = true, env = "ROUTETREE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a route schema and print the resulting paths
    Resolve(ResolveCommand),

    /// Check that a route schema loads and resolves
    Validate(ValidateCommand),

    /// Join path fragments into a normalized path
    Join(JoinCommand),

    /// Convert text to the kebab-case segment used for route keys
    Kebab(KebabCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
