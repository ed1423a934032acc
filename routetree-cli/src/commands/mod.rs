//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve a route schema and print the paths
//! - `validate`: Check that a route schema loads and resolves
//! - `join`: Join path fragments into a normalized path
//! - `kebab`: Convert text to a kebab-case route segment
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod join;
pub mod kebab;
pub mod resolve;
pub mod validate;

pub use completions::CompletionsCommand;
pub use join::JoinCommand;
pub use kebab::KebabCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
