//! Build script for routetree-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("routetree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve nested route declarations into URL paths")
        .long_about(
            "Command-line tool for resolving route declaration files into absolute URL paths",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load this configuration file on top of discovered ones")
                .value_name("PATH")
                .global(true)
                .env("ROUTETREE_CONFIG"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve a route schema and print the resulting paths")
                .long_about("Load a YAML or JSON route schema, resolve it beneath a base path, and print it as json, yaml, or a list"),
            Command::new("validate")
                .about("Check that a route schema loads and resolves")
                .long_about("Load and resolve a route schema, printing ok on success"),
            Command::new("join")
                .about("Join path fragments into a normalized path")
                .long_about("Join path fragments with single slashes and a leading slash"),
            Command::new("kebab")
                .about("Convert text to the kebab-case segment used for route keys")
                .long_about("Show the path segment a nested route key produces"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("routetree.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
