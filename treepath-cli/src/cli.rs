//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use treepath::config::LAYOUT_ENV;

use crate::commands::{KeypathsCommand, RelativeCommand, ResolveCommand, ValidateCommand};

/// Resolve paths in declarative artifact layouts.
#[derive(Parser)]
#[command(name = "treepath")]
#[command(version, about = "Resolve paths in declarative artifact layouts", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Layout file (default: treepath.yaml found from the current directory)
    #[arg(long, value_name = "PATH", global = true, env = LAYOUT_ENV)]
    pub layout: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the absolute path of a key path
    Resolve(ResolveCommand),

    /// Print the relative path between two key paths
    Relative(RelativeCommand),

    /// List key paths with their kind and required parameters
    Keypaths(KeypathsCommand),

    /// Validate a layout file
    Validate(ValidateCommand),
}
