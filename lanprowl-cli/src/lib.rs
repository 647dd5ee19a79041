//! CLI interface for lanprowl
//!
//! Argument parsing and the subcommand implementations behind the
//! `lanprowl` binary.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
